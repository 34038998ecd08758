//! Team model and trait implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::FootballClient;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::traits::Fetch;
use crate::validate::{Constraint, FieldCheck, Validate, SEASON};

/// Endpoint path for teams information.
pub const TEAMS_PATH: &str = "/teams";

/// A team with its home venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamInformation {
    pub team: Team,
    pub venue: Venue,
}

/// Basic information on a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    /// Three-letter code.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Year the club was founded.
    #[serde(default)]
    pub founded: Option<i32>,
    /// Whether this is a national team.
    #[serde(default)]
    pub national: bool,
    #[serde(default)]
    pub logo: Option<String>,
}

/// A team's home venue. Every field may be unknown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Venue {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub capacity: Option<u32>,
    pub surface: Option<String>,
    pub image: Option<String>,
}

/// Query parameters for `/teams`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamsQuery {
    /// Team id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Exact team name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Season year (4 digits), used together with `league`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<i32>,

    /// Partial name or country, at least 3 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// League id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league: Option<i64>,

    /// Three-letter team code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Venue id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<i64>,
}

impl Validate for TeamsQuery {
    fn checks(&self) -> Vec<FieldCheck<'_>> {
        vec![
            FieldCheck::int("id", self.id, Constraint::NonNegative),
            FieldCheck::text("name", self.name.as_deref(), Constraint::MinLen(1)),
            FieldCheck::text("country", self.country.as_deref(), Constraint::MinLen(1)),
            FieldCheck::int("season", self.season, SEASON),
            FieldCheck::text("search", self.search.as_deref(), Constraint::MinLen(3)),
            FieldCheck::int("league", self.league, Constraint::NonNegative),
            FieldCheck::text("code", self.code.as_deref(), Constraint::Len(3)),
            FieldCheck::int("venue", self.venue, Constraint::NonNegative),
        ]
    }
}

#[async_trait]
impl Fetch for TeamInformation {
    const PATH: &'static str = TEAMS_PATH;
    type Query = TeamsQuery;

    #[tracing::instrument(skip(client))]
    async fn fetch(client: &FootballClient, query: Option<&TeamsQuery>) -> Result<ApiResponse<Self>> {
        let envelope = client.get(Self::PATH, query).await?;
        ApiResponse::from_envelope(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{mistyped_fields, validate};

    #[test]
    fn test_team_information_deserialize() {
        let json = r#"{
            "team": {"id": 33, "name": "Manchester United", "code": "MUN", "country": "England",
                     "founded": 1878, "national": false,
                     "logo": "https://media.api-sports.io/football/teams/33.png"},
            "venue": {"id": 556, "name": "Old Trafford", "address": "Sir Matt Busby Way",
                      "city": "Manchester", "capacity": 76212, "surface": "grass",
                      "image": "https://media.api-sports.io/football/venues/556.png"}
        }"#;

        let info: TeamInformation = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(info.team.id, 33);
        assert_eq!(info.team.code.as_deref(), Some("MUN"));
        assert_eq!(info.team.founded, Some(1878));
        assert_eq!(info.venue.name.as_deref(), Some("Old Trafford"));
        assert_eq!(info.venue.capacity, Some(76212));
    }

    #[test]
    fn test_unknown_venue() {
        let json = r#"{
            "team": {"id": 9999, "name": "Tiny FC", "code": null, "country": "Nowhere",
                     "founded": null, "national": false, "logo": null},
            "venue": {"id": null, "name": null, "address": null, "city": null,
                      "capacity": null, "surface": null, "image": null}
        }"#;

        let info: TeamInformation = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(info.team.founded.is_none());
        assert!(info.venue.id.is_none());
    }

    #[test]
    fn test_query_validation() {
        let query = TeamsQuery {
            code: Some("MU".to_string()),
            venue: Some(-5),
            ..Default::default()
        };
        let err = validate(&query).unwrap_err();
        assert!(err.has_field("code"));
        assert!(err.has_field("venue"));
        assert_eq!(err.violations().len(), 2);

        let valid = TeamsQuery {
            code: Some("MUN".to_string()),
            league: Some(39),
            season: Some(2021),
            ..Default::default()
        };
        assert!(validate(&valid).is_ok());
    }

    #[test]
    fn test_query_serialization_omits_absent() {
        let query = TeamsQuery {
            id: Some(0),
            ..Default::default()
        };
        let serialized = serde_qs::to_string(&query).expect("Failed to serialize query");
        assert_eq!(serialized, "id=0");
    }

    fn full_query() -> TeamsQuery {
        TeamsQuery {
            id: Some(33),
            name: Some("Manchester United".to_string()),
            country: Some("England".to_string()),
            season: Some(2021),
            search: Some("manch".to_string()),
            league: Some(39),
            code: Some("MUN".to_string()),
            venue: Some(556),
        }
    }

    #[test]
    fn test_constraint_table_is_well_typed() {
        assert!(mistyped_fields(&full_query()).is_empty());
    }

    #[test]
    fn test_encode_then_parse_round_trips() {
        let query = TeamsQuery {
            name: Some("Brighton & Hove [Albion] = 50%+".to_string()),
            ..full_query()
        };
        let encoded = serde_qs::to_string(&query).expect("Failed to serialize query");
        let decoded: TeamsQuery = serde_qs::from_str(&encoded).expect("Failed to parse query");
        assert_eq!(decoded, query);
    }
}
