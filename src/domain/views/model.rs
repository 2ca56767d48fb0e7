use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-title view counters. `daily` buckets are keyed by `YYYY-MM-DD`;
/// `name`/`thumb` are the last display metadata the player reported, so
/// top-view listings can render without another catalog round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewEntry {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub daily: HashMap<String, u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
}

/// Ranking window for top-view queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
    All,
}

impl Period {
    /// Unknown strings rank over the full history, matching the lenient
    /// query parsing of the public API.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "day" => Self::Day,
            "week" => Self::Week,
            "month" => Self::Month,
            _ => Self::All,
        }
    }

    /// Number of daily buckets the window spans; `None` means all time.
    pub fn days(self) -> Option<u32> {
        match self {
            Self::Day => Some(1),
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::All => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::All => "all",
        }
    }
}

/// One row of a top-views ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopViewEntry {
    pub slug: String,
    pub name: String,
    pub thumb: String,
    pub views: u64,
}
