//! Last-modified timestamp handling
//!
//! Records carry a `last_modified` timestamp. Whether that value comes from
//! the caller or is stamped when the repository writes is a deployment
//! decision, captured by [`TimestampPolicy`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::store::Record;

/// How the repository treats `last_modified` on writes
///
/// Deserializes through [`FromStr`], so configuration accepts the same
/// spellings as `str::parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum TimestampPolicy {
    /// Stamp the current time on every insert and merge
    #[default]
    ServerStamped,
    /// Keep the caller's value; on merge an absent value keeps the stored one
    Trusted,
}

impl TimestampPolicy {
    /// Sets the timestamp of a record about to be inserted
    pub fn stamp_insert<R: Record>(&self, record: &mut R, now: DateTime<Utc>) {
        if let TimestampPolicy::ServerStamped = self {
            record.set_last_modified(Some(now));
        }
    }

    /// Sets the timestamp of a merged record from the incoming one
    pub fn stamp_merge<R: Record>(&self, merged: &mut R, incoming: &R, now: DateTime<Utc>) {
        match self {
            TimestampPolicy::ServerStamped => merged.set_last_modified(Some(now)),
            TimestampPolicy::Trusted => {
                if let Some(at) = incoming.last_modified() {
                    merged.set_last_modified(Some(at));
                }
            }
        }
    }
}

/// Error returned when a timestamp policy name is not recognised
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown timestamp policy: {0}")]
pub struct UnknownTimestampPolicy(pub String);

impl FromStr for TimestampPolicy {
    type Err = UnknownTimestampPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "server_stamped" | "server" => Ok(TimestampPolicy::ServerStamped),
            "trusted" | "caller" => Ok(TimestampPolicy::Trusted),
            other => Err(UnknownTimestampPolicy(other.to_string())),
        }
    }
}

impl TryFrom<String> for TimestampPolicy {
    type Error = UnknownTimestampPolicy;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy() {
        assert_eq!("trusted".parse(), Ok(TimestampPolicy::Trusted));
        assert_eq!("Server_Stamped".parse(), Ok(TimestampPolicy::ServerStamped));
        assert!("sometimes".parse::<TimestampPolicy>().is_err());
    }

    #[test]
    fn test_deserialize_accepts_parse_aliases() {
        let policy: TimestampPolicy = serde_json::from_str("\"caller\"").unwrap();
        assert_eq!(policy, TimestampPolicy::Trusted);
        assert_eq!(
            serde_json::to_string(&TimestampPolicy::ServerStamped).unwrap(),
            "\"server_stamped\""
        );
        assert!(serde_json::from_str::<TimestampPolicy>("\"never\"").is_err());
    }

    #[test]
    fn test_default_is_server_stamped() {
        assert_eq!(TimestampPolicy::default(), TimestampPolicy::ServerStamped);
    }
}
