//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! footballapi binary, and the conversions from flags to endpoint queries.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{
    CountriesQuery, FixtureStatusCode, FixturesQuery, LeagueType, LeaguesQuery, Subscription,
    TeamsQuery,
};

/// API-Football command-line interface.
#[derive(Parser, Debug)]
#[command(name = "footballapi", about = "API-Football v3 CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// How the account is subscribed; selects base URL, key variable and header.
    #[arg(long, global = true, value_enum, default_value_t = Plan::ApiSports)]
    pub subscription: Plan,

    #[command(subcommand)]
    pub command: Command,
}

/// Subscription modes accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plan {
    /// Direct API-Sports subscription (API_SPORTS_KEY).
    #[value(alias = "apisports")]
    ApiSports,
    /// RapidAPI subscription (RAPID_API_KEY).
    #[value(alias = "rapidapi")]
    RapidApi,
}

impl From<Plan> for Subscription {
    fn from(plan: Plan) -> Self {
        match plan {
            Plan::ApiSports => Subscription::ApiSports,
            Plan::RapidApi => Subscription::RapidApi,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List countries.
    Countries(CountriesArgs),
    /// List leagues and cups.
    Leagues(LeaguesArgs),
    /// List teams with their venue.
    Teams(TeamsArgs),
    /// List fixtures.
    Fixtures(FixturesArgs),
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct CountriesArgs {
    #[arg(long)]
    pub name: Option<String>,

    /// Two-letter country code.
    #[arg(long)]
    pub code: Option<String>,

    #[arg(long)]
    pub search: Option<String>,
}

impl From<&CountriesArgs> for CountriesQuery {
    fn from(args: &CountriesArgs) -> Self {
        Self {
            name: args.name.clone(),
            code: args.code.clone(),
            search: args.search.clone(),
        }
    }
}

/// Competition formats accepted by `--type`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeagueKind {
    League,
    Cup,
}

impl From<LeagueKind> for LeagueType {
    fn from(kind: LeagueKind) -> Self {
        match kind {
            LeagueKind::League => LeagueType::League,
            LeagueKind::Cup => LeagueType::Cup,
        }
    }
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct LeaguesArgs {
    #[arg(long)]
    pub id: Option<i64>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// Two-letter country code.
    #[arg(long)]
    pub code: Option<String>,

    #[arg(long)]
    pub season: Option<i32>,

    #[arg(long)]
    pub team: Option<i64>,

    #[arg(long = "type", value_enum)]
    pub league_type: Option<LeagueKind>,

    /// Only leagues with (`true`) or without (`false`) an ongoing season.
    #[arg(long)]
    pub current: Option<bool>,

    #[arg(long)]
    pub search: Option<String>,

    /// The N most recently added leagues.
    #[arg(long)]
    pub last: Option<i32>,
}

impl From<&LeaguesArgs> for LeaguesQuery {
    fn from(args: &LeaguesArgs) -> Self {
        Self {
            id: args.id,
            name: args.name.clone(),
            country: args.country.clone(),
            code: args.code.clone(),
            season: args.season,
            team: args.team,
            league_type: args.league_type.map(LeagueType::from),
            current: args.current,
            search: args.search.clone(),
            last: args.last,
        }
    }
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct TeamsArgs {
    #[arg(long)]
    pub id: Option<i64>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub season: Option<i32>,

    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub league: Option<i64>,

    /// Three-letter team code.
    #[arg(long)]
    pub code: Option<String>,

    #[arg(long)]
    pub venue: Option<i64>,
}

impl From<&TeamsArgs> for TeamsQuery {
    fn from(args: &TeamsArgs) -> Self {
        Self {
            id: args.id,
            name: args.name.clone(),
            country: args.country.clone(),
            season: args.season,
            search: args.search.clone(),
            league: args.league,
            code: args.code.clone(),
            venue: args.venue,
        }
    }
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct FixturesArgs {
    #[arg(long)]
    pub id: Option<i64>,

    /// Several fixture ids, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<i64>,

    /// Only fixtures in play.
    #[arg(long)]
    pub live: bool,

    /// Restrict `--live` to these leagues, comma separated.
    #[arg(long = "live-league", value_delimiter = ',')]
    pub live_leagues: Vec<i64>,

    /// Day, `YYYY-MM-DD`.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    #[arg(long)]
    pub league: Option<i64>,

    #[arg(long)]
    pub season: Option<i32>,

    #[arg(long)]
    pub team: Option<i64>,

    #[arg(long)]
    pub last: Option<i32>,

    #[arg(long)]
    pub next: Option<i32>,

    #[arg(long)]
    pub from: Option<NaiveDate>,

    #[arg(long)]
    pub to: Option<NaiveDate>,

    #[arg(long)]
    pub round: Option<String>,

    /// Short status, e.g. `NS`, `1H`, `FT`.
    #[arg(long)]
    pub status: Option<FixtureStatusCode>,

    #[arg(long)]
    pub timezone: Option<String>,
}

impl From<&FixturesArgs> for FixturesQuery {
    fn from(args: &FixturesArgs) -> Self {
        Self {
            id: args.id,
            ids: args.ids.clone(),
            live: args.live,
            live_leagues: args.live_leagues.clone(),
            date: args.date,
            league: args.league,
            season: args.season,
            team: args.team,
            last: args.last,
            next: args.next,
            from: args.from,
            to: args.to,
            round: args.round.clone(),
            status: args.status,
            timezone: args.timezone.clone(),
        }
    }
}
