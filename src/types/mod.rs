//! Typed records for the NCAA football feeds
//!
//! This module groups the XML-mapped record types by feed:
//! - `division`: division selectors and team hierarchy records
//! - `schedule`: schedule phase selectors and season schedule records
//! - `boxscore`: boxscore records for a single game

pub mod boxscore;
pub mod division;
pub mod schedule;

// Re-export commonly used items for convenience
pub use boxscore::{Boxscore, BoxscoreGame, BoxscoreTeam, QuarterScoring};
pub use division::{Conference, Division, DivisionHierarchy, Subdivision, Team, Venue};
pub use schedule::{Broadcast, Game, Schedule, ScheduleType, Season, Week};
