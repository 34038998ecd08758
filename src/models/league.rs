//! League model and trait implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::FootballClient;
use crate::error::Result;
use crate::models::country::Country;
use crate::response::ApiResponse;
use crate::traits::Fetch;
use crate::validate::{Constraint, FieldCheck, Validate, COUNT, SEASON};

/// Endpoint path for leagues.
pub const LEAGUES_PATH: &str = "/leagues";

/// Competition format, accepted by the `type` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeagueType {
    /// Championship played as a league.
    League,
    /// Cup competition.
    Cup,
}

/// A league or cup, with the seasons the API covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub league: LeagueInfo,
    pub country: Country,
    #[serde(default)]
    pub seasons: Vec<Season>,
}

/// Basic information on the league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueInfo {
    pub id: i64,
    pub name: String,
    /// "League" or "Cup" as spelled by the API.
    #[serde(rename = "type")]
    pub league_type: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// One season of a league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub year: i32,
    /// First day, `YYYY-MM-DD`.
    #[serde(default)]
    pub start: Option<String>,
    /// Last day, `YYYY-MM-DD`.
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub coverage: Coverage,
}

/// Which data the API provides for a season.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Coverage {
    pub fixtures: FixturesCoverage,
    pub standings: bool,
    pub players: bool,
    pub top_scorers: bool,
    pub top_assists: bool,
    pub top_cards: bool,
    pub injuries: bool,
    pub predictions: bool,
    pub odds: bool,
}

/// Fixture-level coverage of a season.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FixturesCoverage {
    pub events: bool,
    pub lineups: bool,
    pub statistics_fixtures: bool,
    pub statistics_players: bool,
}

impl League {
    /// The season flagged as current, if any.
    pub fn current_season(&self) -> Option<&Season> {
        self.seasons.iter().find(|s| s.current)
    }
}

/// Query parameters for `/leagues`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaguesQuery {
    /// League id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Exact league name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Season year (4 digits).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<i32>,

    /// Leagues a team played in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<i64>,

    /// League or cup.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub league_type: Option<LeagueType>,

    /// Only leagues with an ongoing season (`true`) or without (`false`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<bool>,

    /// Partial name or country, at least 3 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// The N most recently added leagues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<i32>,
}

impl Validate for LeaguesQuery {
    fn checks(&self) -> Vec<FieldCheck<'_>> {
        vec![
            FieldCheck::int("id", self.id, Constraint::NonNegative),
            FieldCheck::text("name", self.name.as_deref(), Constraint::MinLen(1)),
            FieldCheck::text("country", self.country.as_deref(), Constraint::MinLen(1)),
            FieldCheck::text("code", self.code.as_deref(), Constraint::Len(2)),
            FieldCheck::int("season", self.season, SEASON),
            FieldCheck::int("team", self.team, Constraint::NonNegative),
            FieldCheck::text("search", self.search.as_deref(), Constraint::MinLen(3)),
            FieldCheck::int("last", self.last, COUNT),
        ]
    }
}

#[async_trait]
impl Fetch for League {
    const PATH: &'static str = LEAGUES_PATH;
    type Query = LeaguesQuery;

    #[tracing::instrument(skip(client))]
    async fn fetch(client: &FootballClient, query: Option<&LeaguesQuery>) -> Result<ApiResponse<Self>> {
        let envelope = client.get(Self::PATH, query).await?;
        ApiResponse::from_envelope(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{mistyped_fields, validate};

    #[test]
    fn test_league_deserialize() {
        let json = r#"{
            "league": {"id": 39, "name": "Premier League", "type": "League",
                       "logo": "https://media.api-sports.io/football/leagues/39.png"},
            "country": {"name": "England", "code": "GB", "flag": "https://media.api-sports.io/flags/gb.svg"},
            "seasons": [
                {"year": 2022, "start": "2022-08-05", "end": "2023-05-28", "current": false,
                 "coverage": {"fixtures": {"events": true, "lineups": true,
                              "statistics_fixtures": true, "statistics_players": true},
                              "standings": true, "players": true, "top_scorers": true,
                              "top_assists": true, "top_cards": true, "injuries": true,
                              "predictions": true, "odds": false}},
                {"year": 2023, "start": "2023-08-11", "end": "2024-05-19", "current": true,
                 "coverage": {"standings": true}}
            ]
        }"#;

        let league: League = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(league.league.id, 39);
        assert_eq!(league.league.league_type, "League");
        assert_eq!(league.country.code.as_deref(), Some("GB"));
        assert_eq!(league.seasons.len(), 2);
        assert!(league.seasons[0].coverage.fixtures.statistics_players);
        assert!(!league.seasons[0].coverage.odds);

        let current = league.current_season().unwrap();
        assert_eq!(current.year, 2023);
        assert_eq!(current.end.as_deref(), Some("2024-05-19"));
        assert!(!current.coverage.fixtures.events);
    }

    #[test]
    fn test_query_validation_reports_every_field() {
        let query = LeaguesQuery {
            id: Some(-1),
            code: Some("GBR".to_string()),
            season: Some(20),
            search: Some("pr".to_string()),
            last: Some(100),
            ..Default::default()
        };
        let err = validate(&query).unwrap_err();
        let fields: Vec<_> = err.fields().collect();
        assert_eq!(fields, vec!["id", "code", "season", "search", "last"]);
    }

    #[test]
    fn test_query_serialization() {
        let query = LeaguesQuery {
            id: Some(39),
            league_type: Some(LeagueType::Cup),
            current: Some(true),
            ..Default::default()
        };
        let serialized = serde_qs::to_string(&query).expect("Failed to serialize query");
        assert_eq!(serialized, "id=39&type=cup&current=true");
    }

    #[test]
    fn test_explicit_false_is_sent() {
        let query = LeaguesQuery {
            current: Some(false),
            ..Default::default()
        };
        let serialized = serde_qs::to_string(&query).expect("Failed to serialize query");
        assert_eq!(serialized, "current=false");
    }

    fn full_query() -> LeaguesQuery {
        LeaguesQuery {
            id: Some(39),
            name: Some("Premier League".to_string()),
            country: Some("England".to_string()),
            code: Some("GB".to_string()),
            season: Some(2021),
            team: Some(33),
            league_type: Some(LeagueType::Cup),
            current: Some(false),
            search: Some("prem".to_string()),
            last: Some(5),
        }
    }

    #[test]
    fn test_constraint_table_is_well_typed() {
        assert!(mistyped_fields(&full_query()).is_empty());
    }

    #[test]
    fn test_encode_then_parse_round_trips() {
        let query = LeaguesQuery {
            name: Some("Coupe [de] France & co = 100%+".to_string()),
            ..full_query()
        };
        let encoded = serde_qs::to_string(&query).expect("Failed to serialize query");
        let decoded: LeaguesQuery = serde_qs::from_str(&encoded).expect("Failed to parse query");
        assert_eq!(decoded, query);
    }
}
