//! Typed homework records and verdict rendering

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::HeraldError;

/// Review status of a submitted homework
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Fixed human-readable verdict text for this status
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Work reviewed: the reviewer liked everything. Hooray!",
            HomeworkStatus::Reviewing => "Work picked up for review.",
            HomeworkStatus::Rejected => "Work reviewed: the reviewer has remarks.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = HeraldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(HeraldError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeworkStatus::Approved => write!(f, "approved"),
            HomeworkStatus::Reviewing => write!(f, "reviewing"),
            HomeworkStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A single homework entry from the status report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    pub name: String,
    pub status: HomeworkStatus,
}

impl Homework {
    /// Extract a typed homework record from a decoded API item.
    ///
    /// Both `homework_name` and `status` must be present as strings, and
    /// the status must be one of the known codes.
    pub fn from_value(value: &Value) -> crate::Result<Self> {
        let name = value
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(HeraldError::MissingField("homework_name"))?;
        let status = value
            .get("status")
            .and_then(Value::as_str)
            .ok_or(HeraldError::MissingField("status"))?;

        Ok(Self {
            name: name.to_string(),
            status: status.parse()?,
        })
    }

    /// Compose the notification text for this homework
    pub fn message(&self) -> String {
        format!(
            "Review status changed for \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}
