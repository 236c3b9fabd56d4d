use std::convert::TryFrom;

use diesel::dsl::count;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use warp::http::StatusCode;
use warp::reply::{self, Reply, Response};

use crate::error::{self, HttpError};
use crate::voting::{self, CreateVote, UnvalidatedCreateVote};
use super::db::{establish_connection, models, schema};
use super::models::{CountsQuery, DataBody, VoteCreatedBody};

/// `POST /vote`
pub fn cast(raw: UnvalidatedCreateVote) -> Response {
    let vote = match CreateVote::try_from(raw) {
        Err(err) => return HttpError::from(err).into_response(),
        Ok(v) => v,
    };

    match cast_internal(vote) {
        Err(err) => err.into_response(),
        Ok(created) => {
            tracing::info!(id = created.id, "vote cast");
            reply::with_status(
                reply::json(&VoteCreatedBody {
                    message: "Vote cast successfully!",
                    vote: created,
                }),
                StatusCode::CREATED,
            )
            .into_response()
        },
    }
}

fn cast_internal(vote: CreateVote) -> Result<models::Vote, HttpError> {
    let conn = &mut establish_connection().map_err(error::db_connect)?;

    diesel::insert_into(schema::votes::table)
        .values(models::NewVote::from(vote))
        .returning(models::Vote::as_returning())
        .get_result(conn)
        .map_err(|err| error::db_query(err, "casting the vote"))
}

/// `GET /data` — every vote, newest first, for the raw table view.
pub fn data() -> Response {
    match data_internal() {
        Err(err) => err.into_response(),
        Ok(votes) => reply::json(&DataBody { data: votes }).into_response(),
    }
}

fn data_internal() -> Result<Vec<models::Vote>, HttpError> {
    let conn = &mut establish_connection().map_err(error::db_connect)?;

    schema::votes::table
        .order(schema::votes::casted_at.desc())
        .select(models::Vote::as_select())
        .load(conn)
        .map_err(|err| error::db_query(err, "fetching vote data"))
}

/// `GET /counts?voting_choice=true|false` — per-day counts for one choice,
/// ascending by day, for the line chart.
pub fn counts(query: CountsQuery) -> Response {
    let choice = match query.voting_choice.as_deref() {
        Some("true") => true,
        Some("false") => false,
        other => {
            return HttpError::from(error::counts_choice_invalid(other)).into_response();
        },
    };

    match counts_internal(choice) {
        Err(err) => err.into_response(),
        Ok(counts) => reply::json(&DataBody { data: counts }).into_response(),
    }
}

fn counts_internal(choice: bool) -> Result<Vec<voting::DailyCount>, HttpError> {
    let conn = &mut establish_connection().map_err(error::db_connect)?;

    let rows: Vec<models::DayCount> = diesel::sql_query(
        "SELECT count(id) AS count, date(casted_at) AS casted_at_date \
         FROM votes WHERE voting_choice = $1 \
         GROUP BY casted_at_date ORDER BY casted_at_date ASC",
    )
    .bind::<Bool, _>(choice)
    .load(conn)
    .map_err(|err| error::db_query(err, "fetching chart data"))?;

    Ok(voting::daily_counts(
        rows.into_iter().map(|r| (r.casted_at_date, r.count)).collect(),
    ))
}

/// `GET /results` — overall totals for both choices, for the bar chart.
pub fn results() -> Response {
    match results_internal() {
        Err(err) => err.into_response(),
        Ok(totals) => reply::json(&DataBody { data: totals }).into_response(),
    }
}

fn results_internal() -> Result<Vec<voting::ChoiceTotal>, HttpError> {
    use schema::votes::dsl::*;

    let conn = &mut establish_connection().map_err(error::db_connect)?;

    let rows: Vec<(bool, i64)> = votes
        .group_by(voting_choice)
        .select((voting_choice, count(id)))
        .load(conn)
        .map_err(|err| error::db_query(err, "fetching results"))?;

    Ok(voting::fill_totals(rows))
}
