//! NCAA Football API Client Library
//!
//! A Rust client for the Sportradar NCAA football XML feeds, covering
//! division hierarchies, season schedules, and per-game boxscores.
//!
//! ## Features
//!
//! - **Division Hierarchies**: Conference, subdivision, and team listings for
//!   all six NCAA football divisions
//! - **Season Schedules**: Regular and post-season schedules broken down by week
//! - **Boxscores**: Per-game scoring, fetched one game or a whole schedule at a time
//! - **Request Pacing**: A flat one-second delay before every request keeps
//!   batch fetches under the provider's rate limit
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ncaafb::{Client, Division, ScheduleType};
//!
//! # async fn example() -> ncaafb::Result<()> {
//! // Trial tier, quiet logging
//! let client = Client::new("your-api-key", false, false);
//!
//! let fbs = client.fetch_division(Division::FBS).await?;
//! println!("{} conferences", fbs.conferences.len());
//!
//! let schedule = client.fetch_schedule("2014", ScheduleType::Regular).await?;
//! let game_ids: Vec<&str> = schedule
//!     .season
//!     .weeks
//!     .iter()
//!     .flat_map(|week| week.games.iter())
//!     .map(|game| game.id.as_str())
//!     .collect();
//!
//! let boxscores = client.fetch_schedule_boxscores(&schedule, &game_ids).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use client::{AccessLevel, Client, DEFAULT_BASE_URL, REQUEST_PACING};
pub use error::{Error, Result};
pub use types::{
    Boxscore, BoxscoreGame, BoxscoreTeam, Broadcast, Conference, Division, DivisionHierarchy,
    Game, QuarterScoring, Schedule, ScheduleType, Season, Subdivision, Team, Venue, Week,
};
