//! API-Football CLI binary.
//!
//! A command-line interface for querying the API-Football v3 API.

use clap::Parser;
use footballapi::cli::{Cli, Command};
use footballapi::output::PrettyPrint;
use footballapi::{
    ApiResponse, ClientConfig, CountriesQuery, Country, Fetch, Fixture, FixturesQuery,
    FootballClient, League, LeaguesQuery, Subscription, TeamInformation, TeamsQuery,
};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let subscription: Subscription = cli.subscription.into();

    let client = match ClientConfig::from_env(subscription).and_then(FootballClient::new) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "Hint: Set {} environment variable",
                subscription.api_key_env()
            );
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &FootballClient, cli: Cli) -> footballapi::Result<()> {
    match cli.command {
        Command::Countries(args) => {
            let query = CountriesQuery::from(&args);
            let countries = Country::fetch(client, Some(&query)).await?;
            output(&countries, cli.json, |c| CountryRow::from(c))
        }
        Command::Leagues(args) => {
            let query = LeaguesQuery::from(&args);
            let leagues = League::fetch(client, Some(&query)).await?;
            output(&leagues, cli.json, |l| LeagueRow::from(l))
        }
        Command::Teams(args) => {
            let query = TeamsQuery::from(&args);
            let teams = TeamInformation::fetch(client, Some(&query)).await?;
            output(&teams, cli.json, |t| TeamRow::from(t))
        }
        Command::Fixtures(args) => {
            let query = FixturesQuery::from(&args);
            let fixtures = Fixture::fetch(client, Some(&query)).await?;
            output(&fixtures, cli.json, |f| FixtureRow::from(f))
        }
    }
}

/// One record prints as key-value lines, several as a table.
fn output<T, R, F>(response: &ApiResponse<T>, json: bool, to_row: F) -> footballapi::Result<()>
where
    T: Serialize + PrettyPrint,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(&response.items)?);
        return Ok(());
    }

    match response.items.as_slice() {
        [] => println!("No results"),
        [single] => println!("{}", single.pretty_print()),
        items => {
            let rows: Vec<R> = items.iter().map(to_row).collect();
            println!("{}", Table::new(rows));
        }
    }

    if let (Some(current), Some(total)) = (
        response.envelope.current_page(),
        response.envelope.total_pages(),
    ) {
        if total > 1 {
            println!("\nPage {}/{} ({} results)", current, total, response.results());
        }
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct CountryRow {
    name: String,
    code: String,
}

impl From<&Country> for CountryRow {
    fn from(c: &Country) -> Self {
        Self {
            name: c.name.clone(),
            code: c.code.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct LeagueRow {
    id: i64,
    name: String,
    #[tabled(rename = "type")]
    league_type: String,
    country: String,
}

impl From<&League> for LeagueRow {
    fn from(l: &League) -> Self {
        Self {
            id: l.league.id,
            name: l.league.name.clone(),
            league_type: l.league.league_type.clone(),
            country: l.country.name.clone(),
        }
    }
}

#[derive(Tabled)]
struct TeamRow {
    id: i64,
    name: String,
    country: String,
    venue: String,
}

impl From<&TeamInformation> for TeamRow {
    fn from(t: &TeamInformation) -> Self {
        Self {
            id: t.team.id,
            name: t.team.name.clone(),
            country: t.team.country.clone().unwrap_or_default(),
            venue: t.venue.name.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct FixtureRow {
    id: i64,
    date: String,
    home: String,
    away: String,
    score: String,
    status: String,
}

impl From<&Fixture> for FixtureRow {
    fn from(f: &Fixture) -> Self {
        Self {
            id: f.fixture.id,
            date: f.fixture.date.format("%Y-%m-%d %H:%M").to_string(),
            home: f.teams.home.name.clone(),
            away: f.teams.away.name.clone(),
            score: match (f.goals.home, f.goals.away) {
                (Some(h), Some(a)) => format!("{h} - {a}"),
                _ => String::new(),
            },
            status: f.fixture.status.short.clone(),
        }
    }
}
