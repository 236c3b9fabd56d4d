mod db;
pub mod models;
mod vote_api;

use std::convert::Infallible;
use std::env;

use tracing::info;
use warp::http::StatusCode;
use warp::reply::{self, Reply};
use warp::{Filter, Rejection};

use models::{CountsQuery, ErrorBody};

pub fn routes() -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    // Paths are matched before methods so that an unknown path stays a
    // plain not-found instead of collecting method rejections.
    let index = warp::path::end()
        .and(warp::get())
        .map(|| reply::html("Polling System Backend is running!"));

    let cast_vote = warp::path("vote")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(16 * 1024))
        .and(warp::body::json())
        .map(vote_api::cast);

    let all_votes = warp::path("data")
        .and(warp::path::end())
        .and(warp::get())
        .map(vote_api::data);

    let counts = warp::path("counts")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<CountsQuery>())
        .map(vote_api::counts);

    let results = warp::path("results")
        .and(warp::path::end())
        .and(warp::get())
        .map(vote_api::results);

    index
        .or(cast_vote)
        .or(all_votes)
        .or(counts)
        .or(results)
        .recover(handle_rejection)
}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, String::from("Not found."))
    } else if let Some(body_err) = err.find::<warp::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, format!("Invalid request body: {body_err}"))
    } else if err.find::<warp::reject::InvalidQuery>().is_some() {
        (StatusCode::BAD_REQUEST, String::from("Invalid query string."))
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, String::from("Method not allowed."))
    } else {
        tracing::error!(?err, "unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            String::from("An internal server error occurred."),
        )
    };

    Ok(reply::with_status(
        reply::json(&ErrorBody { error: message }),
        code,
    ))
}

pub async fn serve() {
    // Fail fast when the database is unconfigured.
    db::database_url();

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    // The dashboard is served separately, so allow any origin.
    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST"])
        .allow_header("content-type");

    info!("listening on 0.0.0.0:{port}");
    warp::serve(routes().with(cors)).run(([0, 0, 0, 0], port)).await;
}
