//! Maps the positional label row of a game log onto the statistics we know how to average.

use crate::gamelog::GamelogError;
use crate::league::Sport;
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum Stat {
    // Basketball
    Minutes,
    FieldGoals,
    ThreePointers,
    FreeThrows,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    Points,

    // Football
    PassingCompletions,
    PassingAttempts,
    PassingYards,
    PassingTouchdowns,
    Interceptions,
    Sacks,
    RushingAttempts,
    RushingYards,
    RushingTouchdowns,
    Receptions,
    ReceivingTargets,
    ReceivingYards,
    ReceivingTouchdowns,
}

impl Stat {
    pub(crate) fn key(self) -> &'static str {
        match self {
            Stat::Minutes => "minutes",
            Stat::FieldGoals => "field_goals",
            Stat::ThreePointers => "three_pointers",
            Stat::FreeThrows => "free_throws",
            Stat::Rebounds => "rebounds",
            Stat::Assists => "assists",
            Stat::Steals => "steals",
            Stat::Blocks => "blocks",
            Stat::Turnovers => "turnovers",
            Stat::Points => "points",
            Stat::PassingCompletions => "passing_completions",
            Stat::PassingAttempts => "passing_attempts",
            Stat::PassingYards => "passing_yards",
            Stat::PassingTouchdowns => "passing_touchdowns",
            Stat::Interceptions => "passing_interceptions",
            Stat::Sacks => "sacks",
            Stat::RushingAttempts => "rushing_attempts",
            Stat::RushingYards => "rushing_yards",
            Stat::RushingTouchdowns => "rushing_touchdowns",
            Stat::Receptions => "receptions",
            Stat::ReceivingTargets => "receiving_targets",
            Stat::ReceivingYards => "receptions_yards",
            Stat::ReceivingTouchdowns => "receptions_touchdowns",
        }
    }

    /// Composite `made-attempted` columns, averaged as a shooting percentage.
    pub(crate) fn is_split(self) -> bool {
        matches!(
            self,
            Stat::FieldGoals | Stat::ThreePointers | Stat::FreeThrows
        )
    }
}

/// Resolved column position of each statistic for one document. A statistic that is not in the
/// index cannot be computed for that document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct LabelIndex(IndexMap<Stat, usize>);

impl LabelIndex {
    pub(crate) fn get(&self, stat: Stat) -> Option<usize> {
        self.0.get(&stat).copied()
    }

    pub(crate) fn contains(&self, stat: Stat) -> bool {
        self.0.contains_key(&stat)
    }

    /// Statistics in the order they were resolved.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Stat, usize)> + '_ {
        self.0.iter().map(|(stat, index)| (*stat, *index))
    }

    // first claim wins
    fn claim(&mut self, stat: Stat, index: usize) {
        self.0.entry(stat).or_insert(index);
    }
}

impl FromIterator<(Stat, usize)> for LabelIndex {
    fn from_iter<I: IntoIterator<Item = (Stat, usize)>>(iter: I) -> LabelIndex {
        let mut index = LabelIndex::default();
        for (stat, i) in iter {
            index.claim(stat, i);
        }
        index
    }
}

pub(crate) fn resolve(labels: &[String], sport: Sport) -> Result<LabelIndex, GamelogError> {
    match sport {
        Sport::Basketball => resolve_basketball(labels),
        Sport::Football => Ok(resolve_football(labels)),
    }
}

// =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=

const BASKETBALL_REQUIRED: [(&str, Stat); 7] = [
    ("MIN", Stat::Minutes),
    ("FG", Stat::FieldGoals),
    ("REB", Stat::Rebounds),
    ("AST", Stat::Assists),
    ("STL", Stat::Steals),
    ("BLK", Stat::Blocks),
    ("PTS", Stat::Points),
];

const BASKETBALL_OPTIONAL: [(&str, Stat); 3] = [
    ("3PT", Stat::ThreePointers),
    ("FT", Stat::FreeThrows),
    ("TO", Stat::Turnovers),
];

fn position(labels: &[String], label: &str) -> Option<usize> {
    labels.iter().position(|l| l.trim() == label)
}

/// Basketball labels are a fixed vocabulary; every required label must be present.
pub(crate) fn resolve_basketball(labels: &[String]) -> Result<LabelIndex, GamelogError> {
    let missing: Vec<&'static str> = BASKETBALL_REQUIRED
        .iter()
        .filter(|(label, _)| position(labels, label).is_none())
        .map(|(label, _)| *label)
        .collect();
    if !missing.is_empty() {
        return Err(GamelogError::SchemaResolutionFailure { missing });
    }

    Ok(BASKETBALL_REQUIRED
        .iter()
        .chain(BASKETBALL_OPTIONAL.iter())
        .filter_map(|(label, stat)| Some((*stat, position(labels, label)?)))
        .collect())
}

// =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Passing,
    Rushing,
    Receiving,
}

impl Block {
    fn yards(self) -> Stat {
        match self {
            Block::Passing => Stat::PassingYards,
            Block::Rushing => Stat::RushingYards,
            Block::Receiving => Stat::ReceivingYards,
        }
    }

    fn touchdowns(self) -> Stat {
        match self {
            Block::Passing => Stat::PassingTouchdowns,
            Block::Rushing => Stat::RushingTouchdowns,
            Block::Receiving => Stat::ReceivingTouchdowns,
        }
    }
}

#[derive(Debug, Default)]
struct Scan {
    block: Option<Block>,
    index: LabelIndex,
    rushing_anchor: Option<usize>,
    receiving_anchor: Option<usize>,
}

impl Scan {
    fn step(&mut self, i: usize, label: &str) {
        match label {
            "CMP" => self.enter(Block::Passing, i, Some(Stat::PassingCompletions)),
            "ATT" => self.enter(Block::Passing, i, Some(Stat::PassingAttempts)),
            "QBR" | "RTG" => self.enter(Block::Passing, i, None),
            "SACK" => self.enter(Block::Passing, i, Some(Stat::Sacks)),
            "CAR" | "RUSH_ATT" | "RUSH" => {
                self.enter(Block::Rushing, i, Some(Stat::RushingAttempts))
            }
            "REC" | "RECEPTIONS" => self.enter(Block::Receiving, i, Some(Stat::Receptions)),
            "TGT" => self.enter(Block::Receiving, i, Some(Stat::ReceivingTargets)),
            // a YDS ahead of any block is taken as passing yards; that is the feed's habit, not a
            // documented contract
            "YDS" => self
                .index
                .claim(self.block.unwrap_or(Block::Passing).yards(), i),
            "TD" => {
                if let Some(block) = self.block {
                    self.index.claim(block.touchdowns(), i);
                }
            }
            "INT" => self.index.claim(Stat::Interceptions, i),
            _ => {}
        }
    }

    fn enter(&mut self, block: Block, i: usize, stat: Option<Stat>) {
        self.block = Some(block);
        match block {
            Block::Rushing => {
                self.rushing_anchor.get_or_insert(i);
            }
            Block::Receiving => {
                self.receiving_anchor.get_or_insert(i);
            }
            Block::Passing => {}
        }
        if let Some(stat) = stat {
            self.index.claim(stat, i);
        }
    }

    /// Recovers yards and touchdowns that sit directly after a block anchor without having been
    /// picked up by the scan. For a well-formed label row the scan already claims them, so this
    /// only matters when the scan state was cut short.
    fn repair(mut self, labels: &[String]) -> LabelIndex {
        for (anchor, yards, touchdowns) in [
            (
                self.rushing_anchor,
                Stat::RushingYards,
                Stat::RushingTouchdowns,
            ),
            (
                self.receiving_anchor,
                Stat::ReceivingYards,
                Stat::ReceivingTouchdowns,
            ),
        ] {
            if let Some(anchor) = anchor {
                self.probe(labels, anchor + 1, "YDS", yards);
                self.probe(labels, anchor + 2, "TD", touchdowns);
            }
        }
        self.index
    }

    fn probe(&mut self, labels: &[String], at: usize, expect: &str, stat: Stat) {
        if !self.index.contains(stat) && labels.get(at).map(|l| l.trim()) == Some(expect) {
            self.index.claim(stat, at);
        }
    }
}

/// Football labels repeat (`YDS`, `TD`) across the passing, rushing and receiving blocks, so the
/// meaning of a label depends on the block-introducing label last seen before it. Missing
/// statistics are not an error here; they just stay out of the index.
pub(crate) fn resolve_football(labels: &[String]) -> LabelIndex {
    labels
        .iter()
        .enumerate()
        .fold(Scan::default(), |mut scan, (i, label)| {
            scan.step(i, label.trim());
            scan
        })
        .repair(labels)
}
