use crate::gamelog::labels::{LabelIndex, Stat};
use crate::gamelog::{EventRecord, GameRow};
use indexmap::IndexMap;
use itertools::Itertools;

/// Opponent name as typed by the caller, normalized for matching.
#[derive(Debug, Clone)]
pub(crate) struct Target(String);

impl Target {
    pub(crate) fn new(name: &str) -> Target {
        Target(name.trim().to_lowercase())
    }

    /// Substring match, so "lakers" finds "Los Angeles Lakers".
    pub(crate) fn matches(&self, display_name: &str) -> bool {
        display_name.to_lowercase().contains(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatValue {
    Count(i64),
    Split { made: i64, attempted: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Exclusion {
    UnknownEvent,
    OpponentMismatch,
    DidNotPlay,
}

/// A played game against the target opponent. `values` holds only the statistics whose field
/// parsed; anything else is absent for this game alone.
#[derive(Debug, Clone)]
pub(crate) struct EligibleGame<'a> {
    pub(crate) event_id: &'a str,
    pub(crate) event: &'a EventRecord,
    pub(crate) values: IndexMap<Stat, StatValue>,
}

fn did_not_play(field: Option<&str>) -> bool {
    matches!(field.map(str::trim), None | Some("") | Some("0") | Some("--"))
}

fn parse_count(field: &str) -> Option<StatValue> {
    field.trim().parse().ok().map(StatValue::Count)
}

fn parse_split(field: &str) -> Option<StatValue> {
    let (made, attempted) = field.trim().split('-').collect_tuple()?;
    let made: i64 = made.trim().parse().ok()?;
    let attempted: i64 = attempted.trim().parse().ok()?;
    if attempted <= 0 || made > attempted {
        return None;
    }
    Some(StatValue::Split { made, attempted })
}

/// Classifies one game row. `played_column` is the field checked for a did-not-play marker;
/// that check is the only one that rejects the whole row once the opponent matches.
pub(crate) fn classify<'a>(
    row: &GameRow<'a>,
    index: &LabelIndex,
    played_column: Option<usize>,
    target: &Target,
) -> Result<EligibleGame<'a>, Exclusion> {
    let event = row.event.ok_or(Exclusion::UnknownEvent)?;
    if !target.matches(&event.opponent.display_name) {
        return Err(Exclusion::OpponentMismatch);
    }

    let field = |i: usize| row.stats.get(i).map(String::as_str);
    if did_not_play(played_column.and_then(field)) {
        return Err(Exclusion::DidNotPlay);
    }

    let values = index
        .iter()
        .filter_map(|(stat, i)| {
            let raw = field(i)?;
            let value = if stat.is_split() {
                parse_split(raw)
            } else {
                parse_count(raw)
            }?;
            Some((stat, value))
        })
        .collect();

    Ok(EligibleGame {
        event_id: row.event_id,
        event,
        values,
    })
}
