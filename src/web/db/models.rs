use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Date};
use serde::Serialize;

use crate::voting;
use super::schema;

#[derive(Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = schema::votes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Vote {
    pub id: i32,
    pub name: String,
    pub voting_choice: bool,
    pub casted_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = schema::votes)]
pub struct NewVote {
    pub name: String,
    pub voting_choice: bool,
    pub casted_at: NaiveDateTime,
}

impl From<voting::CreateVote> for NewVote {
    fn from(vote: voting::CreateVote) -> Self {
        let voting::CreateVote { name, voting_choice, casted_at } = vote;
        NewVote { name, voting_choice, casted_at }
    }
}

/// Row shape of the per-day grouping query in `vote_api::counts`.
#[derive(Debug, QueryableByName)]
pub struct DayCount {
    #[diesel(sql_type = BigInt)]
    pub count: i64,
    #[diesel(sql_type = Date)]
    pub casted_at_date: NaiveDate,
}
