//! Test data fixtures for the mock server.
//!
//! Provides factory functions for realistic records and for the envelopes
//! the API wraps them in.

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};

use crate::{
    Country, Coverage, Fixture, FixtureInfo, FixtureLeague, FixtureStatus, FixtureStatusCode,
    FixtureTeam, FixtureTeams, FixtureVenue, Goals, League, LeagueInfo, Periods, Score, Season,
    Team, TeamInformation, Venue,
};

/// Number of countries the real `/countries` endpoint returns.
pub const COUNTRY_COUNT: usize = 164;

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Country Fixtures
    // =========================================================================

    /// Create a country with a code and flag derived from it.
    pub fn country(name: &str, code: &str) -> Country {
        Country {
            name: name.to_string(),
            code: Some(code.to_string()),
            flag: Some(format!(
                "https://media.api-sports.io/flags/{}.svg",
                code.to_lowercase()
            )),
        }
    }

    /// Create `count` distinct countries. The first one is `World`, which has
    /// neither code nor flag.
    pub fn countries(count: usize) -> Vec<Country> {
        (0..count)
            .map(|i| {
                if i == 0 {
                    return Country {
                        name: "World".to_string(),
                        code: None,
                        flag: None,
                    };
                }
                let code = two_letter_code(i);
                Self::country(&format!("Country {code}"), &code)
            })
            .collect()
    }

    // =========================================================================
    // League Fixtures
    // =========================================================================

    /// Create a league with a single current season.
    pub fn league(id: i64, name: &str, country: Country, season: i32) -> League {
        League {
            league: LeagueInfo {
                id,
                name: name.to_string(),
                league_type: "League".to_string(),
                logo: Some(format!(
                    "https://media.api-sports.io/football/leagues/{id}.png"
                )),
            },
            country,
            seasons: vec![Season {
                year: season,
                start: Some(format!("{season}-08-01")),
                end: Some(format!("{}-05-31", season + 1)),
                current: true,
                coverage: Coverage {
                    standings: true,
                    ..Default::default()
                },
            }],
        }
    }

    // =========================================================================
    // Team Fixtures
    // =========================================================================

    /// Create a club with a known home venue.
    pub fn team_information(id: i64, name: &str, country: &str, venue: &str) -> TeamInformation {
        TeamInformation {
            team: Team {
                id,
                name: name.to_string(),
                code: Some(name.chars().take(3).collect::<String>().to_uppercase()),
                country: Some(country.to_string()),
                founded: Some(1900),
                national: false,
                logo: Some(format!("https://media.api-sports.io/football/teams/{id}.png")),
            },
            venue: Venue {
                id: Some(id * 10),
                name: Some(venue.to_string()),
                city: Some(country.to_string()),
                capacity: Some(40_000),
                surface: Some("grass".to_string()),
                ..Default::default()
            },
        }
    }

    // =========================================================================
    // Fixture Fixtures
    // =========================================================================

    /// Create a fixture between two teams.
    ///
    /// Goals are only set once the match has kicked off.
    pub fn fixture(
        id: i64,
        league: (i64, &str),
        home: (i64, &str),
        away: (i64, &str),
        status: FixtureStatusCode,
        kick_off: i64,
    ) -> Fixture {
        let played = status.is_live() || status.is_finished();
        let goals = if played {
            Goals {
                home: Some(2),
                away: Some(1),
            }
        } else {
            Goals::default()
        };
        let home_wins = status.is_finished().then_some(true);

        Fixture {
            fixture: FixtureInfo {
                id,
                referee: played.then(|| "A. Referee".to_string()),
                timezone: "UTC".to_string(),
                date: DateTime::<Utc>::from_timestamp(kick_off, 0).unwrap_or_default(),
                timestamp: kick_off,
                periods: Periods {
                    first: played.then_some(kick_off),
                    second: status.is_finished().then_some(kick_off + 3600),
                },
                venue: FixtureVenue::default(),
                status: FixtureStatus {
                    long: status.description().to_string(),
                    short: status.as_str().to_string(),
                    elapsed: if status.is_finished() {
                        Some(90)
                    } else if played {
                        Some(45)
                    } else {
                        None
                    },
                },
            },
            league: FixtureLeague {
                id: league.0,
                name: league.1.to_string(),
                country: "England".to_string(),
                logo: None,
                flag: None,
                season: 2021,
                round: Some("Regular Season - 1".to_string()),
            },
            teams: FixtureTeams {
                home: FixtureTeam {
                    id: home.0,
                    name: home.1.to_string(),
                    logo: None,
                    winner: home_wins,
                },
                away: FixtureTeam {
                    id: away.0,
                    name: away.1.to_string(),
                    logo: None,
                    winner: home_wins.map(|w| !w),
                },
            },
            goals,
            score: Score {
                fulltime: if status.is_finished() { goals } else { Goals::default() },
                ..Default::default()
            },
        }
    }

    // =========================================================================
    // Envelope Fixtures
    // =========================================================================

    /// Wrap records in a successful envelope.
    ///
    /// `parameters` echoes the query; the API sends `[]` rather than `{}`
    /// when there is none.
    pub fn envelope(get: &str, parameters: &[(&str, &str)], response: Vec<Value>) -> Value {
        json!({
            "get": get,
            "parameters": echo_parameters(parameters),
            "errors": [],
            "results": response.len(),
            "paging": {"current": 1, "total": 1},
            "response": response,
        })
    }

    /// An envelope whose `errors` map makes the call fail despite a 200.
    pub fn error_envelope(get: &str, parameters: &[(&str, &str)], errors: &[(&str, &str)]) -> Value {
        let errors: Map<String, Value> = errors
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::from(*v)))
            .collect();
        json!({
            "get": get,
            "parameters": echo_parameters(parameters),
            "errors": errors,
            "results": 0,
            "paging": {"current": 1, "total": 1},
            "response": [],
        })
    }

    /// The payload of a 4xx answer.
    pub fn error_message(message: &str) -> Value {
        json!({ "message": message })
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

fn echo_parameters(parameters: &[(&str, &str)]) -> Value {
    if parameters.is_empty() {
        return json!([]);
    }
    let map: Map<String, Value> = parameters
        .iter()
        .map(|(k, v)| ((*k).to_string(), Value::from(*v)))
        .collect();
    Value::Object(map)
}

/// Distinct two-letter codes: AA, AB, ..., AZ, BA, ...
fn two_letter_code(i: usize) -> String {
    let first = (b'A' + (i / 26 % 26) as u8) as char;
    let second = (b'A' + (i % 26) as u8) as char;
    format!("{first}{second}")
}

/// One canned answer of the default scenario.
pub struct CannedRoute {
    pub path: &'static str,
    pub query: Vec<(&'static str, &'static str)>,
    pub status: u16,
    pub body: Value,
}

/// A complete test scenario covering every endpoint.
pub struct DefaultScenario {
    pub countries: Vec<Country>,
    pub leagues: Vec<League>,
    pub teams: Vec<TeamInformation>,
    pub fixtures: Vec<Fixture>,
    /// Answers that are not plain record lists.
    pub extra: Vec<CannedRoute>,
}

impl DefaultScenario {
    fn new() -> Self {
        let england = Fixtures::country("England", "GB");

        let leagues = vec![Fixtures::league(39, "Premier League", england, 2021)];

        let teams = vec![Fixtures::team_information(
            33,
            "Manchester United",
            "England",
            "Old Trafford",
        )];

        let fixtures = vec![
            Fixtures::fixture(
                710556,
                (39, "Premier League"),
                (33, "Manchester United"),
                (63, "Leeds"),
                FixtureStatusCode::Finished,
                1_628_940_600,
            ),
            Fixtures::fixture(
                710567,
                (39, "Premier League"),
                (41, "Southampton"),
                (33, "Manchester United"),
                FixtureStatusCode::NotStarted,
                1_629_545_400,
            ),
        ];

        // A single fixture id cannot be combined with the live filter.
        let extra = vec![CannedRoute {
            path: "/fixtures",
            query: vec![("id", "1132381"), ("live", "all")],
            status: 200,
            body: Fixtures::error_envelope(
                "fixtures",
                &[("id", "1132381"), ("live", "all")],
                &[("Live", "The Live field cannot be used with the id field.")],
            ),
        }];

        Self {
            countries: Fixtures::countries(COUNTRY_COUNT),
            leagues,
            teams,
            fixtures,
            extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countries_are_distinct() {
        let countries = Fixtures::countries(COUNTRY_COUNT);
        assert_eq!(countries.len(), 164);
        assert_eq!(countries[0].name, "World");
        assert!(countries[0].code.is_none());

        let mut codes: Vec<_> = countries.iter().filter_map(|c| c.code.clone()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 163);
    }

    #[test]
    fn test_envelope_shape() {
        let envelope = Fixtures::envelope("countries", &[], vec![json!({"name": "World"})]);
        assert_eq!(envelope["results"], 1);
        assert_eq!(envelope["parameters"], json!([]));
        assert_eq!(envelope["errors"], json!([]));

        let envelope = Fixtures::envelope("teams", &[("id", "33")], vec![]);
        assert_eq!(envelope["parameters"]["id"], "33");
    }

    #[test]
    fn test_finished_fixture() {
        let fixture = Fixtures::fixture(
            1,
            (39, "Premier League"),
            (1, "A"),
            (2, "B"),
            FixtureStatusCode::Finished,
            1_600_000_000,
        );
        assert_eq!(fixture.fixture.status.code(), Some(FixtureStatusCode::Finished));
        assert_eq!(fixture.teams.home.winner, Some(true));
        assert_eq!(fixture.teams.away.winner, Some(false));
        assert_eq!(fixture.score.fulltime, fixture.goals);
    }

    #[test]
    fn test_default_scenario() {
        let scenario = Fixtures::default_scenario();
        assert_eq!(scenario.countries.len(), COUNTRY_COUNT);
        assert!(!scenario.leagues.is_empty());
        assert!(!scenario.teams.is_empty());
        assert!(!scenario.fixtures.is_empty());
        assert!(!scenario.extra.is_empty());
    }
}
