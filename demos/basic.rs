//! Tour of the four endpoints.
//!
//! Run with `API_SPORTS_KEY=... cargo run --example basic`.

use footballapi::{
    Country, Fetch, Fixture, FixturesQuery, FootballClient, League, LeaguesQuery, Subscription,
    TeamInformation, TeamsQuery,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> footballapi::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = FootballClient::from_env(Subscription::ApiSports)?;

    let countries = Country::fetch(&client, None).await?;
    tracing::info!("There are {} countries.", countries.len());

    let live = FixturesQuery {
        live: true,
        ..Default::default()
    };
    let fixtures = Fixture::fetch(&client, Some(&live)).await?;
    tracing::info!("There are {} live fixtures.", fixtures.len());

    let premier_league = LeaguesQuery {
        id: Some(39),
        current: Some(true),
        ..Default::default()
    };
    let leagues = League::fetch(&client, Some(&premier_league)).await?;
    if let Some(league) = leagues.iter().next() {
        let end = league
            .current_season()
            .and_then(|s| s.end.as_deref())
            .unwrap_or("an unknown date");
        tracing::info!("The current season of {} ends on {}", league.league.name, end);
    }

    let team = TeamsQuery {
        id: Some(42),
        ..Default::default()
    };
    let teams = TeamInformation::fetch(&client, Some(&team)).await?;
    if let Some(info) = teams.iter().next() {
        tracing::info!(
            "{} was founded in {} and plays at {}",
            info.team.name,
            info.team.founded.map(|y| y.to_string()).unwrap_or_default(),
            info.venue.name.as_deref().unwrap_or("an unknown venue"),
        );
    }

    Ok(())
}
