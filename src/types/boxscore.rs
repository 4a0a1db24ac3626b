//! Boxscore records for a single game.

use serde::{Deserialize, Serialize};

use super::schedule::ScheduleType;

/// The game element of a boxscore document.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoxscoreGame {
    pub id: String,
    pub away: String,
    pub home: String,
    pub status: Option<String>,
    pub scheduled: Option<String>,
    pub completed: Option<String>,
    pub quarter: Option<String>,
    pub clock: Option<String>,
    #[serde(rename = "team", default)]
    pub teams: Vec<BoxscoreTeam>,
}

/// Per-team score lines within a boxscore.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoxscoreTeam {
    pub id: String,
    pub name: Option<String>,
    pub market: Option<String>,
    pub points: Option<i32>,
    pub remaining_timeouts: Option<u32>,
    pub remaining_challenges: Option<u32>,
    #[serde(rename = "scoring", default)]
    pub scoring: Vec<QuarterScoring>,
}

/// Points scored by one team in one quarter.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuarterScoring {
    pub quarter: String,
    pub points: i32,
}

/// A fetched boxscore: the parsed game plus the request context it was
/// built from.
///
/// Like [`Schedule`](super::schedule::Schedule), the year, phase, and
/// week are stamped from the request rather than read back out of the
/// feed.
#[derive(Debug, Clone, Serialize)]
pub struct Boxscore {
    pub year: String,
    pub schedule_type: ScheduleType,
    pub week: String,
    pub game: BoxscoreGame,
}

impl Boxscore {
    /// Attach request context to a parsed game.
    pub fn new(
        year: impl Into<String>,
        schedule_type: ScheduleType,
        week: impl Into<String>,
        game: BoxscoreGame,
    ) -> Self {
        Boxscore {
            year: year.into(),
            schedule_type,
            week: week.into(),
            game,
        }
    }
}
