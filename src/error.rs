use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::convert::From;

use diesel::result::Error as DbError;
use diesel::ConnectionError;
use warp::http::StatusCode;
use warp::reply::{self, Reply, Response};

use crate::web::models::ErrorBody;

#[derive(Debug)]
pub struct ValidationError {
    message: String,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ValidationError {}

pub fn vote_missing_fields(missing: &[&str]) -> ValidationError {
    ValidationError {
        message: format!(
            "Missing or invalid required fields: {}. Expected name (text), voting_choice (true/false), and casted_at (date).",
            missing.join(", "),
        ),
    }
}

pub fn vote_invalid_date(raw: &str) -> ValidationError {
    ValidationError {
        message: format!("casted_at must be a YYYY-MM-DD date, got '{raw}'"),
    }
}

pub fn counts_choice_invalid(raw: Option<&str>) -> ValidationError {
    let message = match raw {
        Some(raw) => format!(
            "Invalid query parameter: voting_choice must be \"true\" or \"false\", got \"{raw}\"."
        ),
        None => String::from(
            "Missing query parameter: voting_choice must be \"true\" or \"false\".",
        ),
    };
    ValidationError { message }
}

#[derive(Debug)]
pub struct HttpError {
    pub code: StatusCode,
    message: String,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.message, self.source)
    }
}

impl Error for HttpError {}

impl From<ValidationError> for HttpError {
    fn from(value: ValidationError) -> Self {
        HttpError {
            message: value.to_string(),
            code: StatusCode::BAD_REQUEST,
            source: None,
        }
    }
}

/// A query that failed inside the database. The client gets a generic
/// message; the diesel error only goes to the log.
pub fn db_query(source: DbError, action: &str) -> HttpError {
    HttpError {
        message: format!("An internal server error occurred while {action}."),
        code: StatusCode::INTERNAL_SERVER_ERROR,
        source: Some(Box::new(source)),
    }
}

pub fn db_connect(source: ConnectionError) -> HttpError {
    HttpError {
        message: String::from("An internal server error occurred."),
        code: StatusCode::INTERNAL_SERVER_ERROR,
        source: Some(Box::new(source)),
    }
}

impl HttpError {
    pub fn into_response(self) -> Response {
        if let Some(source) = &self.source {
            tracing::error!(error = %source, "{}", self.message);
        }
        reply::with_status(
            reply::json(&ErrorBody { error: self.message }),
            self.code,
        )
        .into_response()
    }
}
