//! HTTP client for the NCAA football XML feeds.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::error::{Error, Result};
use crate::types::{
    Boxscore, BoxscoreGame, Division, DivisionHierarchy, Schedule, ScheduleType, Season,
};

/// Base URL the provider serves the feeds from.
pub const DEFAULT_BASE_URL: &str = "https://api.sportsdatallc.org";

/// Fixed delay inserted before every request.
///
/// A blunt per-call throttle that keeps sequential fetches under the
/// provider's rate limit. Deliberately a flat delay, not an adaptive
/// limiter.
pub const REQUEST_PACING: Duration = Duration::from_secs(1);

/// API access tier. Trial and production keys are served under
/// different path prefixes (`ncaafb-t1` vs `ncaafb-p1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    Trial,
    Production,
}

impl AccessLevel {
    /// The tier letter used in the endpoint path prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Trial => "t",
            AccessLevel::Production => "p",
        }
    }
}

/// Client for the NCAA football XML feeds.
///
/// Every fetch sleeps for [`REQUEST_PACING`] before hitting the
/// network, so batch operations take at least one second per request.
/// Batch operations run strictly sequentially and stop at the first
/// error.
#[derive(Debug, Clone)]
pub struct Client {
    api_key: String,
    access_level: AccessLevel,
    verbose: bool,
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a client for the given API key.
    ///
    /// `production` selects the production tier endpoints; trial keys
    /// must pass `false`. When `verbose` is set, endpoint URLs and
    /// batch progress are logged through `tracing`.
    pub fn new(api_key: impl Into<String>, production: bool, verbose: bool) -> Self {
        let access_level = if production {
            AccessLevel::Production
        } else {
            AccessLevel::Trial
        };
        Client {
            api_key: api_key.into(),
            access_level,
            verbose,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Point the client at a different host, keeping the tier prefix.
    /// Intended for tests and proxies.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn base_endpoint(&self) -> String {
        let endpoint = format!("{}/ncaafb-{}1", self.base_url, self.access_level.as_str());
        if self.verbose {
            debug!("base endpoint: {}", endpoint);
        }
        endpoint
    }

    /// Parse an endpoint string and attach the `api_key` query param.
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let mut url = Url::parse(endpoint).map_err(|source| Error::Url {
            url: endpoint.to_string(),
            source,
        })?;
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    fn division_endpoint(&self, division: Division) -> Result<Url> {
        let url = self.endpoint_url(&format!(
            "{}/teams/{}/hierarchy.xml",
            self.base_endpoint(),
            division
        ))?;
        if self.verbose {
            debug!("division endpoint: {}", url);
        }
        Ok(url)
    }

    fn schedule_endpoint(&self, year: &str, schedule_type: ScheduleType) -> Result<Url> {
        let url = self.endpoint_url(&format!(
            "{}/{}/{}/schedule.xml",
            self.base_endpoint(),
            year,
            schedule_type
        ))?;
        if self.verbose {
            debug!("schedule endpoint: {}", url);
        }
        Ok(url)
    }

    fn boxscore_endpoint(
        &self,
        year: &str,
        schedule_type: ScheduleType,
        week: &str,
        away: &str,
        home: &str,
    ) -> Result<Url> {
        let url = self.endpoint_url(&format!(
            "{}/{}/{}/{}/{}/{}/boxscore.xml",
            self.base_endpoint(),
            year,
            schedule_type,
            week,
            away,
            home
        ))?;
        if self.verbose {
            debug!("boxscore endpoint: {}", url);
        }
        Ok(url)
    }

    /// Pace, fetch, and unmarshal one feed document.
    ///
    /// Any status other than 200 is an [`Error::Api`] carrying the
    /// numeric status and the offending URL.
    async fn fetch_xml<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tokio::time::sleep(REQUEST_PACING).await;

        let response = self.http.get(url.as_str()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                url: url.to_string(),
                body,
            });
        }

        let body = response.text().await.map_err(Error::Body)?;
        Ok(serde_xml_rs::from_str(&body)?)
    }

    /// Fetch the team hierarchy for one division.
    pub async fn fetch_division(&self, division: Division) -> Result<DivisionHierarchy> {
        let url = self.division_endpoint(division)?;
        self.fetch_xml(url).await
    }

    /// Fetch the team hierarchy for every division, in
    /// [`Division::ALL`] order. Stops at the first error.
    pub async fn fetch_all_divisions(&self) -> Result<Vec<DivisionHierarchy>> {
        let mut divisions = Vec::new();
        for division in Division::ALL {
            divisions.push(self.fetch_division(division).await?);
        }
        Ok(divisions)
    }

    /// Fetch the schedule for one year and phase.
    ///
    /// The returned [`Schedule`] carries the `year` and
    /// `schedule_type` passed in, not whatever the feed reports.
    pub async fn fetch_schedule(
        &self,
        year: &str,
        schedule_type: ScheduleType,
    ) -> Result<Schedule> {
        let url = self.schedule_endpoint(year, schedule_type)?;
        let season: Season = self.fetch_xml(url).await?;
        Ok(Schedule::new(year, schedule_type, season))
    }

    /// Fetch both phases of every given year, year by year. Stops at
    /// the first error.
    pub async fn fetch_all_schedules(&self, years: &[&str]) -> Result<Vec<Schedule>> {
        let mut schedules = Vec::new();
        for year in years {
            for schedule_type in ScheduleType::ALL {
                schedules.push(self.fetch_schedule(year, schedule_type).await?);
            }
        }
        Ok(schedules)
    }

    /// Fetch the boxscore for one game.
    ///
    /// The returned [`Boxscore`] carries the `year`, `schedule_type`,
    /// and `week` passed in, not whatever the feed reports.
    pub async fn fetch_boxscore(
        &self,
        year: &str,
        schedule_type: ScheduleType,
        week: &str,
        away: &str,
        home: &str,
    ) -> Result<Boxscore> {
        let url = self.boxscore_endpoint(year, schedule_type, week, away, home)?;
        let game: BoxscoreGame = self.fetch_xml(url).await?;
        Ok(Boxscore::new(year, schedule_type, week, game))
    }

    /// Fetch boxscores for the given game ids out of an already
    /// fetched schedule.
    ///
    /// Walks the schedule's weeks and games in feed order and fetches
    /// a boxscore for each game whose id appears in `game_ids`, so the
    /// results come back in schedule order regardless of the order of
    /// the ids. Ids that match no game are skipped. Stops at the first
    /// error.
    pub async fn fetch_schedule_boxscores(
        &self,
        schedule: &Schedule,
        game_ids: &[&str],
    ) -> Result<Vec<Boxscore>> {
        let mut boxscores = Vec::new();
        for week in &schedule.season.weeks {
            for game in &week.games {
                if game_ids.iter().any(|id| *id == game.id) {
                    if self.verbose {
                        info!(
                            "Getting boxscore for {}: {}, {}, week {}, {} at {}",
                            game.id,
                            schedule.year,
                            schedule.schedule_type,
                            week.number,
                            game.away,
                            game.home
                        );
                    }
                    let boxscore = self
                        .fetch_boxscore(
                            &schedule.year,
                            schedule.schedule_type,
                            &week.number,
                            &game.away,
                            &game.home,
                        )
                        .await?;
                    boxscores.push(boxscore);
                }
            }
        }
        Ok(boxscores)
    }
}
