//! Schedule phase selectors and season schedule records.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::division::Venue;

/// Schedule phase recognized by the provider.
///
/// The endpoint path literals are lowercase (`reg`, `pst`), matching
/// the provider's URL scheme. [`ScheduleType::ALL`] lists both phases
/// in the order batch fetches walk them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleType {
    /// Regular season (`reg` in endpoint paths).
    #[serde(rename = "reg")]
    Regular,
    /// Post-season (`pst` in endpoint paths).
    #[serde(rename = "pst")]
    PostSeason,
}

impl ScheduleType {
    /// Both phases, regular season first.
    pub const ALL: [ScheduleType; 2] = [ScheduleType::Regular, ScheduleType::PostSeason];

    /// The path segment used in schedule and boxscore endpoint URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleType::Regular => "reg",
            ScheduleType::PostSeason => "pst",
        }
    }
}

impl fmt::Display for ScheduleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScheduleType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reg" | "regular" => Ok(ScheduleType::Regular),
            "pst" | "post" | "postseason" | "post-season" => Ok(ScheduleType::PostSeason),
            _ => Err(Error::InvalidScheduleType {
                value: s.to_string(),
            }),
        }
    }
}

/// One season's schedule document: an ordered list of weeks.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Season {
    pub id: Option<String>,
    /// Year as the feed reports it. Not reliable; the request year is
    /// stamped on [`Schedule`] instead.
    pub year: Option<String>,
    #[serde(rename = "type")]
    pub season_type: Option<String>,
    #[serde(rename = "week", default)]
    pub weeks: Vec<Week>,
}

/// One week of games, in feed order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Week {
    /// Week number as it appears in boxscore endpoint paths.
    #[serde(rename = "week")]
    pub number: String,
    #[serde(rename = "game", default)]
    pub games: Vec<Game>,
}

/// A single scheduled game.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Game {
    pub id: String,
    /// Away team id, as used in boxscore endpoint paths.
    pub away: String,
    /// Home team id, as used in boxscore endpoint paths.
    pub home: String,
    pub scheduled: Option<String>,
    pub status: Option<String>,
    pub coverage: Option<String>,
    pub venue: Option<Venue>,
    pub broadcast: Option<Broadcast>,
}

/// Broadcast availability for a game.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Broadcast {
    pub network: Option<String>,
    pub satellite: Option<String>,
    pub internet: Option<String>,
    pub cable: Option<String>,
}

/// A fetched schedule: the parsed season plus the request context it
/// was built from.
///
/// The feed does not echo year and phase reliably, so the client stamps
/// the exact values used in the request URL here.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub year: String,
    pub schedule_type: ScheduleType,
    pub season: Season,
}

impl Schedule {
    /// Attach request context to a parsed season.
    pub fn new(year: impl Into<String>, schedule_type: ScheduleType, season: Season) -> Self {
        Schedule {
            year: year.into(),
            schedule_type,
            season,
        }
    }
}
