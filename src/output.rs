//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Country, Fixture, League, TeamInformation};

/// Trait for human-readable key-value output.
///
/// Implemented by record types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn header(title: String) -> Vec<String> {
    let divider = "─".repeat(title.chars().count().max(30));
    vec![title, divider]
}

impl PrettyPrint for Country {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Country: {}", self.name));

        if let Some(ref code) = self.code {
            lines.push(format!("Code:           {}", code));
        }

        if let Some(ref flag) = self.flag {
            lines.push(format!("Flag:           {}", flag));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for League {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("League #{}: {}", self.league.id, self.league.name));
        lines.push(format!("Type:           {}", self.league.league_type));
        lines.push(format!("Country:        {}", self.country.name));

        if let Some(season) = self.current_season() {
            let span = match (&season.start, &season.end) {
                (Some(start), Some(end)) => format!(" ({start} to {end})"),
                _ => String::new(),
            };
            lines.push(format!("Current Season: {}{}", season.year, span));
        }

        lines.push(format!("Seasons:        {}", self.seasons.len()));

        lines.join("\n")
    }
}

impl PrettyPrint for TeamInformation {
    fn pretty_print(&self) -> String {
        let team = &self.team;
        let mut lines = header(format!("Team #{}: {}", team.id, team.name));

        if let Some(ref code) = team.code {
            lines.push(format!("Code:           {}", code));
        }

        if let Some(ref country) = team.country {
            lines.push(format!("Country:        {}", country));
        }

        if let Some(founded) = team.founded {
            lines.push(format!("Founded:        {}", founded));
        }

        if team.national {
            lines.push("National:       yes".to_string());
        }

        if let Some(ref venue) = self.venue.name {
            let city = self.venue.city.as_deref().map(|c| format!(", {c}")).unwrap_or_default();
            lines.push(format!("Venue:          {}{}", venue, city));
        }

        if let Some(capacity) = self.venue.capacity {
            lines.push(format!("Capacity:       {}", capacity));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Fixture {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!(
            "Fixture #{}: {} vs {}",
            self.fixture.id, self.teams.home.name, self.teams.away.name
        ));

        lines.push(format!(
            "Kick-off:       {}",
            self.fixture.date.format("%Y-%m-%d %H:%M UTC")
        ));
        lines.push(format!(
            "League:         {} {}",
            self.league.name, self.league.season
        ));

        if let Some(ref round) = self.league.round {
            lines.push(format!("Round:          {}", round));
        }

        let status = &self.fixture.status;
        match status.elapsed {
            Some(minutes) => lines.push(format!("Status:         {} ({}')", status.long, minutes)),
            None => lines.push(format!("Status:         {}", status.long)),
        }

        if let (Some(home), Some(away)) = (self.goals.home, self.goals.away) {
            lines.push(format!("Score:          {} - {}", home, away));
        }

        if let Some(ref venue) = self.fixture.venue.name {
            lines.push(format!("Venue:          {}", venue));
        }

        if let Some(ref referee) = self.fixture.referee {
            lines.push(format!("Referee:        {}", referee));
        }

        lines.join("\n")
    }
}
