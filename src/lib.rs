//! API-Football client library.
//!
//! A Rust library for the API-Football v3 REST API using a trait-based
//! architecture: every record type an endpoint returns implements [`Fetch`],
//! which runs the shared validate, encode, request and decode pipeline.
//!
//! # Quick Start
//!
//! ```no_run
//! use footballapi::{
//!     Country, Fetch, Fixture, FixturesQuery, FootballClient, League, LeaguesQuery, Subscription,
//! };
//!
//! #[tokio::main]
//! async fn main() -> footballapi::Result<()> {
//!     // Reads API_SPORTS_KEY from the environment
//!     let client = FootballClient::from_env(Subscription::ApiSports)?;
//!
//!     // Every country, no query string at all
//!     let countries = Country::fetch(&client, None).await?;
//!     println!("Found {} countries", countries.len());
//!
//!     // Fixtures in play in two leagues
//!     let query = FixturesQuery {
//!         live: true,
//!         live_leagues: vec![39, 61],
//!         ..Default::default()
//!     };
//!     let live = Fixture::fetch(&client, Some(&query)).await?;
//!     println!("{} live fixtures", live.len());
//!
//!     // Premier League, current season only
//!     let query = LeaguesQuery {
//!         id: Some(39),
//!         current: Some(true),
//!         ..Default::default()
//!     };
//!     for league in League::fetch(&client, Some(&query)).await? {
//!         println!("{}", league.league.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every failure is a [`FootballError`]; [`FootballError::kind`] sorts it into
//! validation, transport, API, unknown-status or decoding. Invalid parameters
//! are rejected before any network traffic, with every violated field listed.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `API_SPORTS_KEY` or `RAPID_API_KEY` (required, per [`Subscription`])
//! - `API_FOOTBALL_URL` (optional) - Base URL override

mod client;
mod config;
mod envelope;
mod error;
mod models;
mod query;
mod response;
mod traits;
mod validate;

/// CLI argument parsing.
pub mod cli;

/// Terminal output formatting.
pub mod output;

/// In-process mock API-Football server.
#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::FootballClient;
pub use config::{ClientConfig, Subscription, BASE_URL_ENV};
pub use envelope::{decode, decode_envelope, decode_error, Envelope, ErrorPayload};
pub use error::{ErrorKind, FootballError, Result};
pub use query::{encode, encode_pairs, join_ids, prepare, ID_SEPARATOR, LIVE_ALL};
pub use response::ApiResponse;
pub use validate::{
    validate, Constraint, FieldCheck, FieldValue, Validate, ValidationError, Violation,
};

// Re-export traits
pub use traits::Fetch;

// Re-export models
pub use models::{
    // Country types
    CountriesQuery,
    Country,
    COUNTRIES_PATH,
    // Fixture types
    Fixture,
    FixtureInfo,
    FixtureLeague,
    FixtureStatus,
    FixtureStatusCode,
    FixtureTeam,
    FixtureTeams,
    FixtureVenue,
    FixturesParams,
    FixturesQuery,
    Goals,
    Periods,
    Score,
    FIXTURES_PATH,
    // League types
    Coverage,
    FixturesCoverage,
    League,
    LeagueInfo,
    LeagueType,
    LeaguesQuery,
    Season,
    LEAGUES_PATH,
    // Team types
    Team,
    TeamInformation,
    TeamsQuery,
    Venue,
    TEAMS_PATH,
};
