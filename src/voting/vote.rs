use std::convert::TryFrom;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::error::{self, ValidationError};

/// Raw `POST /vote` body. Every field is optional so that presence is
/// checked here rather than by serde, which lets the response name the
/// fields that were actually missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UnvalidatedCreateVote {
    pub name: Option<String>,
    pub voting_choice: Option<bool>,
    pub casted_at: Option<String>,
}

/// A submission that passed validation and is ready to insert.
#[derive(Debug)]
pub struct CreateVote {
    pub name: String,
    pub voting_choice: bool,
    pub casted_at: NaiveDateTime,
}

impl TryFrom<UnvalidatedCreateVote> for CreateVote {
    type Error = ValidationError;

    fn try_from(raw: UnvalidatedCreateVote) -> Result<Self, Self::Error> {
        let UnvalidatedCreateVote { name, voting_choice, casted_at } = raw;

        // The empty string counts as missing, same as the absent field.
        let mut missing = vec![];
        if name.as_deref().map_or(true, str::is_empty) {
            missing.push("name");
        }
        if voting_choice.is_none() {
            missing.push("voting_choice");
        }
        if casted_at.as_deref().map_or(true, str::is_empty) {
            missing.push("casted_at");
        }
        if !missing.is_empty() {
            return Err(error::vote_missing_fields(&missing));
        }

        let date_raw = casted_at.unwrap();
        let date = match NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d") {
            Err(_) => return Err(error::vote_invalid_date(&date_raw)),
            Ok(d) => d,
        };

        Ok(CreateVote {
            name: name.unwrap(),
            voting_choice: voting_choice.unwrap(),
            // date-only input becomes midnight UTC
            casted_at: date.and_time(NaiveTime::MIN),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, choice: Option<bool>, date: &str) -> UnvalidatedCreateVote {
        UnvalidatedCreateVote {
            name: (!name.is_empty()).then(|| String::from(name)),
            voting_choice: choice,
            casted_at: (!date.is_empty()).then(|| String::from(date)),
        }
    }

    #[test]
    fn complete_submission_validates() {
        let vote = CreateVote::try_from(submission("Ada", Some(true), "2024-03-05"))
            .expect("submission should validate");
        assert_eq!(vote.name, "Ada");
        assert!(vote.voting_choice);
        assert_eq!(vote.casted_at.to_string(), "2024-03-05 00:00:00");
    }

    #[test]
    fn missing_name_is_rejected() {
        let err = CreateVote::try_from(submission("", Some(false), "2024-03-05"))
            .expect_err("missing name should fail");
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn missing_choice_is_rejected() {
        let err = CreateVote::try_from(submission("Ada", None, "2024-03-05"))
            .expect_err("missing choice should fail");
        assert!(err.to_string().contains("voting_choice"));
    }

    #[test]
    fn missing_date_is_rejected() {
        let err = CreateVote::try_from(submission("Ada", Some(true), ""))
            .expect_err("missing date should fail");
        assert!(err.to_string().contains("casted_at"));
    }

    #[test]
    fn empty_submission_names_all_fields() {
        let err = CreateVote::try_from(UnvalidatedCreateVote::default())
            .expect_err("empty submission should fail");
        let text = err.to_string();
        assert!(text.contains("name"));
        assert!(text.contains("voting_choice"));
        assert!(text.contains("casted_at"));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let err = CreateVote::try_from(submission("Ada", Some(true), "March 5th"))
            .expect_err("malformed date should fail");
        assert!(err.to_string().contains("casted_at"));
    }
}
