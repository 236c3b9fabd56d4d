use serde::{Deserialize, Serialize};

/// Envelope for every successful list/aggregate response.
#[derive(Serialize)]
pub struct DataBody<T: Serialize> {
    pub data: T,
}

#[derive(Serialize)]
pub struct VoteCreatedBody {
    pub message: &'static str,
    pub vote: super::db::models::Vote,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CountsQuery {
    pub voting_choice: Option<String>,
}
