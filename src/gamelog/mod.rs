//! Opponent-conditioned averages over an athlete's game log.
//!
//! A game log is a positional table: one label row describing the columns, and one row of raw
//! stat strings per game. Nothing here performs I/O; the document is fetched elsewhere and handed
//! in already decoded.

pub(crate) mod aggregate;
pub(crate) mod eligibility;
mod errors;
pub(crate) mod labels;

pub(crate) use aggregate::{aggregate, breakdown, AveragesResult};
pub(crate) use errors::GamelogError;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Raw game log document. Every field is optional at decode time so that a missing field is
/// reported as [`GamelogError::MalformedDocument`] rather than a decode failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Gamelog {
    #[serde(default)]
    pub(crate) labels: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) events: Option<IndexMap<String, EventRecord>>,
    #[serde(default)]
    pub(crate) season_types: Option<Vec<SeasonType>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SeasonType {
    #[serde(default)]
    pub(crate) categories: Vec<Category>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Category {
    #[serde(default)]
    pub(crate) events: Vec<GameEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GameEntry {
    pub(crate) event_id: String,
    #[serde(default)]
    pub(crate) stats: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EventRecord {
    #[serde(default)]
    pub(crate) opponent: Opponent,
    #[serde(default)]
    pub(crate) at_vs: Option<String>,
    #[serde(default, deserialize_with = "deserialize_game_date")]
    pub(crate) game_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub(crate) game_result: Option<String>,
    #[serde(default)]
    pub(crate) score: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Opponent {
    #[serde(default)]
    pub(crate) display_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Venue {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Win,
    Loss,
    Tie,
}

impl EventRecord {
    pub(crate) fn venue(&self) -> Option<Venue> {
        match self.at_vs.as_deref().map(str::trim) {
            Some("@") => Some(Venue::Away),
            Some(s) if s.eq_ignore_ascii_case("vs") => Some(Venue::Home),
            _ => None,
        }
    }

    pub(crate) fn outcome(&self) -> Option<Outcome> {
        match self.game_result.as_deref().map(str::trim) {
            Some("W") => Some(Outcome::Win),
            Some("L") => Some(Outcome::Loss),
            Some("T") => Some(Outcome::Tie),
            _ => None,
        }
    }
}

// the feed writes minute precision ("2024-01-05T00:30Z"), which is not RFC 3339
fn deserialize_game_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = match Option::<String>::deserialize(deserializer)? {
        Some(s) => s,
        None => return Ok(None),
    };
    Ok(DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%MZ")
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive))
        }))
}

/// One game's stat strings together with the event they belong to, if the event is known.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GameRow<'a> {
    pub(crate) event_id: &'a str,
    pub(crate) stats: &'a [String],
    pub(crate) event: Option<&'a EventRecord>,
}

/// Borrowed view of a document whose top-level fields are all present and non-empty.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CheckedGamelog<'a> {
    pub(crate) labels: &'a [String],
    events: &'a IndexMap<String, EventRecord>,
    season_types: &'a [SeasonType],
}

impl Gamelog {
    pub(crate) fn check(&self) -> Result<CheckedGamelog<'_>, GamelogError> {
        let labels = match self.labels.as_deref() {
            Some(labels) if !labels.is_empty() => labels,
            _ => return Err(GamelogError::MalformedDocument("labels")),
        };
        let events = match &self.events {
            Some(events) if !events.is_empty() => events,
            _ => return Err(GamelogError::MalformedDocument("events")),
        };
        let season_types = match self.season_types.as_deref() {
            Some(season_types) if !season_types.is_empty() => season_types,
            _ => return Err(GamelogError::MalformedDocument("seasonTypes")),
        };
        Ok(CheckedGamelog {
            labels,
            events,
            season_types,
        })
    }
}

impl<'a> CheckedGamelog<'a> {
    /// Every game row in feed order, season type by season type.
    pub(crate) fn rows(self) -> impl Iterator<Item = GameRow<'a>> {
        let events = self.events;
        self.season_types
            .iter()
            .flat_map(|season_type| season_type.categories.iter())
            .flat_map(|category| category.events.iter())
            .map(move |entry| GameRow {
                event_id: &entry.event_id,
                stats: &entry.stats,
                event: events.get(&entry.event_id),
            })
    }
}
