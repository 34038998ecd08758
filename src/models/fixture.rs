//! Fixture model and trait implementation.
//!
//! `/fixtures` takes richer parameters than it accepts on the wire: callers
//! build a [`FixturesQuery`] with typed dates, id lists and a live flag, which
//! is translated into [`FixturesParams`] before validation and encoding.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::client::FootballClient;
use crate::error::Result;
use crate::query::{join_ids, LIVE_ALL};
use crate::response::ApiResponse;
use crate::traits::Fetch;
use crate::validate::{Constraint, FieldCheck, Validate, COUNT, SEASON};

/// Endpoint path for fixtures.
pub const FIXTURES_PATH: &str = "/fixtures";

/// Short status of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixtureStatusCode {
    /// Time to be defined.
    #[serde(rename = "TBD")]
    TimeToBeDefined,
    /// Not started.
    #[serde(rename = "NS")]
    NotStarted,
    /// First half, kick off.
    #[serde(rename = "1H")]
    FirstHalf,
    /// Halftime.
    #[serde(rename = "HT")]
    Halftime,
    /// Second half started.
    #[serde(rename = "2H")]
    SecondHalf,
    /// Extra time.
    #[serde(rename = "ET")]
    ExtraTime,
    /// Penalty in progress.
    #[serde(rename = "P")]
    PenaltyInProgress,
    /// Match finished.
    #[serde(rename = "FT")]
    Finished,
    /// Match finished after extra time.
    #[serde(rename = "AET")]
    FinishedAfterExtraTime,
    /// Match finished after penalties.
    #[serde(rename = "PEN")]
    FinishedAfterPenalty,
    /// Break time (in extra time).
    #[serde(rename = "BT")]
    BreakTime,
    /// Match suspended.
    #[serde(rename = "SUSP")]
    Suspended,
    /// Match interrupted.
    #[serde(rename = "INT")]
    Interrupted,
    /// Match postponed.
    #[serde(rename = "PST")]
    Postponed,
    /// Match cancelled.
    #[serde(rename = "CANC")]
    Cancelled,
    /// Match abandoned.
    #[serde(rename = "ABD")]
    Abandoned,
    /// Technical loss.
    #[serde(rename = "AWD")]
    TechnicalLoss,
    /// Walkover.
    #[serde(rename = "WO")]
    WalkOver,
}

impl FixtureStatusCode {
    pub const ALL: [Self; 18] = [
        Self::TimeToBeDefined,
        Self::NotStarted,
        Self::FirstHalf,
        Self::Halftime,
        Self::SecondHalf,
        Self::ExtraTime,
        Self::PenaltyInProgress,
        Self::Finished,
        Self::FinishedAfterExtraTime,
        Self::FinishedAfterPenalty,
        Self::BreakTime,
        Self::Suspended,
        Self::Interrupted,
        Self::Postponed,
        Self::Cancelled,
        Self::Abandoned,
        Self::TechnicalLoss,
        Self::WalkOver,
    ];

    /// The code as sent by the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TimeToBeDefined => "TBD",
            Self::NotStarted => "NS",
            Self::FirstHalf => "1H",
            Self::Halftime => "HT",
            Self::SecondHalf => "2H",
            Self::ExtraTime => "ET",
            Self::PenaltyInProgress => "P",
            Self::Finished => "FT",
            Self::FinishedAfterExtraTime => "AET",
            Self::FinishedAfterPenalty => "PEN",
            Self::BreakTime => "BT",
            Self::Suspended => "SUSP",
            Self::Interrupted => "INT",
            Self::Postponed => "PST",
            Self::Cancelled => "CANC",
            Self::Abandoned => "ABD",
            Self::TechnicalLoss => "AWD",
            Self::WalkOver => "WO",
        }
    }

    /// The long status as spelled by the API.
    pub fn description(self) -> &'static str {
        match self {
            Self::TimeToBeDefined => "Time To Be Defined",
            Self::NotStarted => "Not Started",
            Self::FirstHalf => "First Half",
            Self::Halftime => "Halftime",
            Self::SecondHalf => "Second Half",
            Self::ExtraTime => "Extra Time",
            Self::PenaltyInProgress => "Penalty In Progress",
            Self::Finished => "Match Finished",
            Self::FinishedAfterExtraTime => "Match Finished After Extra Time",
            Self::FinishedAfterPenalty => "Match Finished After Penalty",
            Self::BreakTime => "Break Time",
            Self::Suspended => "Match Suspended",
            Self::Interrupted => "Match Interrupted",
            Self::Postponed => "Match Postponed",
            Self::Cancelled => "Match Cancelled",
            Self::Abandoned => "Match Abandoned",
            Self::TechnicalLoss => "Technical Loss",
            Self::WalkOver => "WalkOver",
        }
    }

    /// Whether the ball is in play (or about to be, within the match).
    pub fn is_live(self) -> bool {
        matches!(
            self,
            Self::FirstHalf
                | Self::Halftime
                | Self::SecondHalf
                | Self::ExtraTime
                | Self::PenaltyInProgress
                | Self::BreakTime
                | Self::Suspended
                | Self::Interrupted
        )
    }

    /// Whether the result is final.
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            Self::Finished
                | Self::FinishedAfterExtraTime
                | Self::FinishedAfterPenalty
                | Self::TechnicalLoss
                | Self::WalkOver
        )
    }
}

impl fmt::Display for FixtureStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FixtureStatusCode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown fixture status '{s}'"))
    }
}

/// A fixture with its league, teams and scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub fixture: FixtureInfo,
    pub league: FixtureLeague,
    pub teams: FixtureTeams,
    #[serde(default)]
    pub goals: Goals,
    #[serde(default)]
    pub score: Score,
}

/// Basic information on the fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureInfo {
    pub id: i64,
    #[serde(default)]
    pub referee: Option<String>,
    pub timezone: String,
    pub date: DateTime<Utc>,
    pub timestamp: i64,
    #[serde(default)]
    pub periods: Periods,
    #[serde(default)]
    pub venue: FixtureVenue,
    pub status: FixtureStatus,
}

/// Kick-off timestamps of both halves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Periods {
    pub first: Option<i64>,
    pub second: Option<i64>,
}

/// Where the fixture is played.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureVenue {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub city: Option<String>,
}

/// Current status of the fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureStatus {
    pub long: String,
    pub short: String,
    /// Minutes played.
    #[serde(default)]
    pub elapsed: Option<u32>,
}

impl FixtureStatus {
    /// Parsed short status, `None` for codes this crate does not know.
    pub fn code(&self) -> Option<FixtureStatusCode> {
        self.short.parse().ok()
    }
}

/// League context of a fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureLeague {
    pub id: i64,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
    pub season: i32,
    #[serde(default)]
    pub round: Option<String>,
}

/// Both sides of a fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureTeams {
    pub home: FixtureTeam,
    pub away: FixtureTeam,
}

/// One side of a fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureTeam {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    /// `None` for a draw or an unfinished fixture.
    #[serde(default)]
    pub winner: Option<bool>,
}

/// Goals per side; `None` for a period that did not happen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goals {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

/// Score per period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Score {
    pub halftime: Goals,
    pub fulltime: Goals,
    pub extratime: Goals,
    pub penalty: Goals,
}

/// Caller-facing parameters for `/fixtures`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixturesQuery {
    /// A single fixture id.
    pub id: Option<i64>,
    /// Several fixture ids.
    pub ids: Vec<i64>,
    /// Only fixtures in play.
    pub live: bool,
    /// Restrict live fixtures to these leagues (ignored unless `live`).
    pub live_leagues: Vec<i64>,
    pub date: Option<NaiveDate>,
    pub league: Option<i64>,
    /// Season year (4 digits).
    pub season: Option<i32>,
    pub team: Option<i64>,
    /// The N last fixtures.
    pub last: Option<i32>,
    /// The N next fixtures.
    pub next: Option<i32>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// Round label, e.g. "Regular Season - 1".
    pub round: Option<String>,
    pub status: Option<FixtureStatusCode>,
    /// IANA timezone used to render dates.
    pub timezone: Option<String>,
}

/// Wire-level parameters for `/fixtures`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixturesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Dash-joined fixture ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<String>,
    /// `all` or dash-joined league ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FixtureStatusCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl From<&FixturesQuery> for FixturesParams {
    fn from(query: &FixturesQuery) -> Self {
        let mut params = Self {
            id: query.id,
            ids: join_ids(&query.ids),
            live: None,
            date: query.date,
            league: query.league,
            season: query.season,
            team: query.team,
            last: query.last,
            next: query.next,
            from: query.from,
            to: query.to,
            round: query.round.clone(),
            status: query.status,
            timezone: query.timezone.clone(),
        };

        if query.live {
            params.live = match query.live_leagues.as_slice() {
                [] => Some(LIVE_ALL.to_string()),
                // A single live league is sent as the league filter and
                // replaces any league set explicitly.
                [league] => {
                    params.league = Some(*league);
                    Some(LIVE_ALL.to_string())
                }
                leagues => join_ids(leagues),
            };
        }

        params
    }
}

impl Validate for FixturesParams {
    fn checks(&self) -> Vec<FieldCheck<'_>> {
        vec![
            FieldCheck::int("id", self.id, Constraint::NonNegative),
            FieldCheck::int("league", self.league, Constraint::NonNegative),
            FieldCheck::int("season", self.season, SEASON),
            FieldCheck::int("team", self.team, Constraint::NonNegative),
            FieldCheck::int("last", self.last, COUNT),
            FieldCheck::int("next", self.next, COUNT),
            FieldCheck::text("round", self.round.as_deref(), Constraint::MinLen(1)),
            FieldCheck::text("timezone", self.timezone.as_deref(), Constraint::MinLen(1)),
        ]
    }
}

#[async_trait]
impl Fetch for Fixture {
    const PATH: &'static str = FIXTURES_PATH;
    type Query = FixturesQuery;

    #[tracing::instrument(skip(client))]
    async fn fetch(client: &FootballClient, query: Option<&FixturesQuery>) -> Result<ApiResponse<Self>> {
        let params = query.map(FixturesParams::from);
        let envelope = client.get(Self::PATH, params.as_ref()).await?;
        ApiResponse::from_envelope(envelope)
    }
}
