use crate::gamelog::eligibility::{self, EligibleGame, Exclusion, StatValue, Target};
use crate::gamelog::labels::{self, LabelIndex, Stat};
use crate::gamelog::{GameRow, Gamelog, GamelogError, Outcome, Venue};
use crate::league::Sport;
use crate::ratio::Ratio;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    sum: i64,
    count: u32,
}

#[derive(Debug, Default, Clone, Copy)]
struct SplitTally {
    made: i64,
    attempted: i64,
    count: u32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct Record {
    pub(crate) wins: u32,
    pub(crate) losses: u32,
    pub(crate) ties: u32,
}

/// What the eligible games looked like, beyond the box score.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct MatchupContext {
    pub(crate) record: Record,
    pub(crate) home_games: u32,
    pub(crate) away_games: u32,
    pub(crate) last_game_date: Option<DateTime<Utc>>,
}

/// Sums for one athlete/opponent pair. Only statistics present in the label index get a tally,
/// which is how "never resolved" stays distinguishable from "averaged to zero".
#[derive(Debug, Default)]
pub(crate) struct RunningAccumulator {
    games_played: u32,
    counts: IndexMap<Stat, Tally>,
    splits: IndexMap<Stat, SplitTally>,
    context: MatchupContext,
}

impl RunningAccumulator {
    pub(crate) fn new(index: &LabelIndex) -> RunningAccumulator {
        let mut acc = RunningAccumulator::default();
        for (stat, _) in index.iter() {
            if stat.is_split() {
                acc.splits.insert(stat, SplitTally::default());
            } else {
                acc.counts.insert(stat, Tally::default());
            }
        }
        acc
    }

    pub(crate) fn push(&mut self, game: &EligibleGame<'_>) {
        self.games_played += 1;
        for (stat, value) in &game.values {
            match *value {
                // a value that would overflow the running sum is dropped like an unreadable one
                StatValue::Count(n) => {
                    if let Some(tally) = self.counts.get_mut(stat) {
                        if let Some(sum) = tally.sum.checked_add(n) {
                            tally.sum = sum;
                            tally.count += 1;
                        }
                    }
                }
                StatValue::Split { made, attempted } => {
                    if let Some(tally) = self.splits.get_mut(stat) {
                        if let (Some(made), Some(attempted)) = (
                            tally.made.checked_add(made),
                            tally.attempted.checked_add(attempted),
                        ) {
                            tally.made = made;
                            tally.attempted = attempted;
                            tally.count += 1;
                        }
                    }
                }
            }
        }

        let context = &mut self.context;
        match game.event.outcome() {
            Some(Outcome::Win) => context.record.wins += 1,
            Some(Outcome::Loss) => context.record.losses += 1,
            Some(Outcome::Tie) => context.record.ties += 1,
            None => {}
        }
        match game.event.venue() {
            Some(Venue::Home) => context.home_games += 1,
            Some(Venue::Away) => context.away_games += 1,
            None => {}
        }
        if game.event.game_date > context.last_game_date {
            context.last_game_date = game.event.game_date;
        }
    }

    pub(crate) fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Sum over every eligible game, not just the games that supplied a value: a game with an
    /// unreadable field counts as zero for that statistic.
    pub(crate) fn average(&self, stat: Stat) -> Option<f64> {
        let tally = self.counts.get(&stat)?;
        if tally.count == 0 {
            return None;
        }
        Some(Ratio::new(tally.sum, self.games_played.into())?.to_places(2))
    }

    /// Made over attempted across all games, as a percentage. `None` unless at least one game
    /// supplied a readable split.
    pub(crate) fn percentage(&self, stat: Stat) -> Option<f64> {
        let tally = self.splits.get(&stat)?;
        if tally.count == 0 {
            return None;
        }
        let ratio = Ratio::new(tally.made, tally.attempted.unsigned_abs())?;
        Some(match ratio.scale(100) {
            Some(pct) => pct.to_places(2),
            None => (ratio.to_f64() * 10_000.0).round() / 100.0,
        })
    }

    pub(crate) fn context(&self) -> &MatchupContext {
        &self.context
    }
}

// =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=

/// The per-sport capabilities. Each sport resolves its own labels, picks the column that says
/// whether the athlete played, and shapes the output; the fold in between is shared.
pub(crate) trait Dialect {
    type Output;

    fn resolve_indices(&self, labels: &[String]) -> Result<LabelIndex, GamelogError>;

    fn played_column(&self, index: &LabelIndex) -> Option<usize>;

    fn emit(&self, acc: &RunningAccumulator) -> Self::Output;

    fn classify_eligibility<'a>(
        &self,
        row: &GameRow<'a>,
        index: &LabelIndex,
        target: &Target,
    ) -> Result<EligibleGame<'a>, Exclusion> {
        eligibility::classify(row, index, self.played_column(index), target)
    }

    fn eligible_games<'a>(
        &self,
        doc: &'a Gamelog,
        opponent: &str,
    ) -> Result<(LabelIndex, Vec<EligibleGame<'a>>), GamelogError> {
        let doc = doc.check()?;
        let index = self.resolve_indices(doc.labels)?;
        let target = Target::new(opponent);
        let games = doc
            .rows()
            .filter_map(|row| self.classify_eligibility(&row, &index, &target).ok())
            .collect();
        Ok((index, games))
    }

    fn aggregate(
        &self,
        doc: &Gamelog,
        opponent: &str,
    ) -> Result<(Self::Output, MatchupContext), GamelogError> {
        let (index, games) = self.eligible_games(doc, opponent)?;
        Ok(fold(&index, &games, |acc| (self.emit(acc), acc.context().clone())))
    }
}

fn fold<T>(
    index: &LabelIndex,
    games: &[EligibleGame<'_>],
    finish: impl FnOnce(&RunningAccumulator) -> T,
) -> T {
    let mut acc = RunningAccumulator::new(index);
    for game in games {
        acc.push(game);
    }
    finish(&acc)
}

// =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct BasketballAverages {
    pub(crate) games_played: u32,
    pub(crate) avg_points: f64,
    pub(crate) avg_rebounds: f64,
    pub(crate) avg_assists: f64,
    pub(crate) avg_steals: f64,
    pub(crate) avg_blocks: f64,
    pub(crate) avg_fg_percentage: f64,
    pub(crate) avg_three_pt_percentage: Option<f64>,
    pub(crate) avg_ft_percentage: Option<f64>,
    pub(crate) avg_turnovers: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BasketballDialect;

impl Dialect for BasketballDialect {
    type Output = BasketballAverages;

    fn resolve_indices(&self, labels: &[String]) -> Result<LabelIndex, GamelogError> {
        labels::resolve(labels, Sport::Basketball)
    }

    fn played_column(&self, index: &LabelIndex) -> Option<usize> {
        index.get(Stat::Minutes)
    }

    // required statistics read 0.0 rather than null; the optional ones stay null whenever no
    // eligible game supplied a value
    fn emit(&self, acc: &RunningAccumulator) -> BasketballAverages {
        let avg = |stat| acc.average(stat).unwrap_or_default();
        let pct = |stat| acc.percentage(stat).unwrap_or_default();
        BasketballAverages {
            games_played: acc.games_played(),
            avg_points: avg(Stat::Points),
            avg_rebounds: avg(Stat::Rebounds),
            avg_assists: avg(Stat::Assists),
            avg_steals: avg(Stat::Steals),
            avg_blocks: avg(Stat::Blocks),
            avg_fg_percentage: pct(Stat::FieldGoals),
            avg_three_pt_percentage: acc.percentage(Stat::ThreePointers),
            avg_ft_percentage: acc.percentage(Stat::FreeThrows),
            avg_turnovers: acc.average(Stat::Turnovers),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct FootballAverages {
    pub(crate) games_played: u32,
    pub(crate) avg_passing_yards: Option<f64>,
    pub(crate) avg_passing_tds: Option<f64>,
    pub(crate) avg_interceptions: Option<f64>,
    pub(crate) avg_rushing_yards: Option<f64>,
    pub(crate) avg_rushing_tds: Option<f64>,
    pub(crate) avg_receptions: Option<f64>,
    pub(crate) avg_receiving_yards: Option<f64>,
    pub(crate) avg_receiving_tds: Option<f64>,
    pub(crate) avg_passing_completions: Option<f64>,
    pub(crate) avg_passing_attempts: Option<f64>,
    pub(crate) avg_sacks: Option<f64>,
    pub(crate) avg_rushing_attempts: Option<f64>,
    pub(crate) avg_receiving_targets: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FootballDialect;

impl Dialect for FootballDialect {
    type Output = FootballAverages;

    fn resolve_indices(&self, labels: &[String]) -> Result<LabelIndex, GamelogError> {
        labels::resolve(labels, Sport::Football)
    }

    fn played_column(&self, _: &LabelIndex) -> Option<usize> {
        Some(0)
    }

    fn emit(&self, acc: &RunningAccumulator) -> FootballAverages {
        FootballAverages {
            games_played: acc.games_played(),
            avg_passing_yards: acc.average(Stat::PassingYards),
            avg_passing_tds: acc.average(Stat::PassingTouchdowns),
            avg_interceptions: acc.average(Stat::Interceptions),
            avg_rushing_yards: acc.average(Stat::RushingYards),
            avg_rushing_tds: acc.average(Stat::RushingTouchdowns),
            avg_receptions: acc.average(Stat::Receptions),
            avg_receiving_yards: acc.average(Stat::ReceivingYards),
            avg_receiving_tds: acc.average(Stat::ReceivingTouchdowns),
            avg_passing_completions: acc.average(Stat::PassingCompletions),
            avg_passing_attempts: acc.average(Stat::PassingAttempts),
            avg_sacks: acc.average(Stat::Sacks),
            avg_rushing_attempts: acc.average(Stat::RushingAttempts),
            avg_receiving_targets: acc.average(Stat::ReceivingTargets),
        }
    }
}

// =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=   =^..^=

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum AveragesResult {
    Basketball(BasketballAverages),
    Football(FootballAverages),
}

impl AveragesResult {
    pub(crate) fn games_played(&self) -> u32 {
        match self {
            AveragesResult::Basketball(averages) => averages.games_played,
            AveragesResult::Football(averages) => averages.games_played,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Aggregate {
    pub(crate) averages: AveragesResult,
    pub(crate) context: MatchupContext,
}

/// Averages of every resolvable statistic across the athlete's games against `opponent`.
pub(crate) fn aggregate(
    doc: &Gamelog,
    opponent: &str,
    sport: Sport,
) -> Result<Aggregate, GamelogError> {
    let (averages, context) = match sport {
        Sport::Basketball => {
            let (averages, context) = BasketballDialect.aggregate(doc, opponent)?;
            (AveragesResult::Basketball(averages), context)
        }
        Sport::Football => {
            let (averages, context) = FootballDialect.aggregate(doc, opponent)?;
            (AveragesResult::Football(averages), context)
        }
    };
    Ok(Aggregate { averages, context })
}

/// One eligible game with every resolved statistic, for export.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GameBreakdown {
    pub(crate) event_id: String,
    pub(crate) game_date: Option<DateTime<Utc>>,
    pub(crate) opponent: String,
    pub(crate) venue: Option<Venue>,
    pub(crate) result: Option<String>,
    pub(crate) score: Option<String>,
    pub(crate) values: Vec<(Stat, Option<StatValue>)>,
}

pub(crate) fn breakdown(
    doc: &Gamelog,
    opponent: &str,
    sport: Sport,
) -> Result<Vec<GameBreakdown>, GamelogError> {
    let (index, games) = match sport {
        Sport::Basketball => BasketballDialect.eligible_games(doc, opponent)?,
        Sport::Football => FootballDialect.eligible_games(doc, opponent)?,
    };
    Ok(games
        .into_iter()
        .map(|game| GameBreakdown {
            event_id: game.event_id.to_owned(),
            game_date: game.event.game_date,
            opponent: game.event.opponent.display_name.clone(),
            venue: game.event.venue(),
            result: game.event.game_result.clone(),
            score: game.event.score.clone(),
            values: index
                .iter()
                .map(|(stat, _)| (stat, game.values.get(&stat).copied()))
                .collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{aggregate, breakdown, AveragesResult, BasketballAverages, FootballAverages};
    use crate::gamelog::eligibility::StatValue;
    use crate::gamelog::labels::Stat;
    use crate::gamelog::tests::document;
    use crate::gamelog::{Gamelog, GamelogError};
    use crate::league::Sport;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;
    use serde_json::json;

    const NBA: [&str; 9] = ["MIN", "FG", "3PT", "REB", "AST", "STL", "BLK", "TO", "PTS"];
    const NFL: [&str; 11] = [
        "CMP", "ATT", "YDS", "TD", "INT", "CAR", "YDS", "TD", "REC", "YDS", "TD",
    ];

    fn basketball(doc: &Gamelog, opponent: &str) -> BasketballAverages {
        match aggregate(doc, opponent, Sport::Basketball).unwrap().averages {
            AveragesResult::Basketball(averages) => averages,
            other => panic!("wrong dialect: {:?}", other),
        }
    }

    fn football(doc: &Gamelog, opponent: &str) -> FootballAverages {
        match aggregate(doc, opponent, Sport::Football).unwrap().averages {
            AveragesResult::Football(averages) => averages,
            other => panic!("wrong dialect: {:?}", other),
        }
    }

    #[test]
    fn field_goal_percentage_uses_totals() {
        let doc = document(
            &NBA,
            &[
                ("1", "Boston Celtics", &["30", "5-10", "1-3", "6", "4", "1", "0", "2", "14"]),
                ("2", "Boston Celtics", &["28", "3-3", "0-1", "4", "2", "0", "1", "1", "7"]),
                ("3", "Boston Celtics", &["12", "0-0", "0-0", "2", "0", "2", "2", "0", "3"]),
            ],
        );
        let averages = basketball(&doc, "celtics");
        assert_eq!(averages.games_played, 3);
        assert_eq!(averages.avg_fg_percentage, 61.54);
        assert_eq!(averages.avg_three_pt_percentage, Some(25.0));
        assert_eq!(averages.avg_points, 8.0);
        assert_eq!(averages.avg_rebounds, 4.0);
        assert_eq!(averages.avg_assists, 2.0);
        assert_eq!(averages.avg_steals, 1.0);
        assert_eq!(averages.avg_blocks, 1.0);
        assert_eq!(averages.avg_turnovers, Some(1.0));
        assert_eq!(averages.avg_ft_percentage, None);
    }

    #[test]
    fn optional_statistics_without_values_are_null() {
        let doc = document(
            &NBA,
            &[
                ("1", "Boston Celtics", &["30", "5-10", "--", "6", "4", "1", "0", "--", "14"]),
                ("2", "Boston Celtics", &["25", "2-4", "0-0", "3", "1", "0", "0", "", "6"]),
            ],
        );
        let averages = basketball(&doc, "celtics");
        assert_eq!(averages.games_played, 2);
        assert_eq!(averages.avg_turnovers, None);
        assert_eq!(averages.avg_three_pt_percentage, None);
        assert_eq!(averages.avg_points, 10.0);
    }

    #[test]
    fn overflowing_sums_drop_the_value() {
        let max = i64::MAX.to_string();
        let doc = document(
            &["CAR", "YDS", "TD"],
            &[
                ("1", "Dallas Cowboys", &["10", max.as_str(), "1"]),
                ("2", "Dallas Cowboys", &["12", max.as_str(), "0"]),
            ],
        );
        let averages = football(&doc, "cowboys");
        assert_eq!(averages.games_played, 2);
        assert_eq!(averages.avg_rushing_attempts, Some(11.0));
        assert_eq!(averages.avg_rushing_tds, Some(0.5));
        float_cmp::assert_approx_eq!(
            f64,
            averages.avg_rushing_yards.unwrap(),
            i64::MAX as f64 / 2.0,
            ulps = 4
        );
    }

    #[test]
    fn excluded_rows_do_not_count() {
        let doc = document(
            &NBA,
            &[
                ("1", "Los Angeles Lakers", &["30", "5-10", "1-3", "6", "4", "1", "0", "2", "14"]),
                ("2", "Los Angeles Lakers", &["--", "", "", "", "", "", "", "", ""]),
                ("3", "LA Clippers", &["35", "9-12", "2-2", "8", "5", "1", "1", "0", "30"]),
                ("4", "Los Angeles Lakers", &["0", "0-0", "0-0", "0", "0", "0", "0", "0", "0"]),
                ("5", "Los Angeles Lakers", &["22", "2-7", "0-2", "3", "1", "0", "0", "1", "5"]),
            ],
        );
        let averages = basketball(&doc, "lakers");
        assert_eq!(averages.games_played, 2);
        assert_eq!(averages.avg_points, 9.5);
        assert_eq!(averages.avg_fg_percentage, 41.18);
    }

    #[test]
    fn no_matching_games() {
        let doc = document(
            &NBA,
            &[("1", "Boston Celtics", &["30", "5-10", "1-3", "6", "4", "1", "0", "2", "14"])],
        );
        assert_eq!(
            basketball(&doc, "knicks"),
            BasketballAverages {
                games_played: 0,
                avg_points: 0.0,
                avg_rebounds: 0.0,
                avg_assists: 0.0,
                avg_steals: 0.0,
                avg_blocks: 0.0,
                avg_fg_percentage: 0.0,
                avg_three_pt_percentage: None,
                avg_ft_percentage: None,
                avg_turnovers: None,
            }
        );

        let doc = document(&NFL, &[("1", "Buffalo Bills", &["20"; 11])]);
        let averages = football(&doc, "jets");
        assert_eq!(averages.games_played, 0);
        assert_eq!(averages.avg_passing_yards, None);
        assert_eq!(averages.avg_receiving_tds, None);
    }

    #[test]
    fn sparse_statistic_averages_over_all_games() {
        let doc = document(
            &NFL,
            &[
                ("1", "Miami Dolphins", &["1", "1", "0", "0", "0", "12", "80", "1", "2", "15", "0"]),
                ("2", "Miami Dolphins", &["1", "1", "0", "0", "0", "9", "--", "0", "1", "4", "0"]),
                ("3", "Miami Dolphins", &["1", "1", "0", "0", "0", "20", "120", "2", "3", "31", "1"]),
                ("4", "Miami Dolphins", &["1", "1", "0", "0", "0", "7", "", "0", "0", "0", "0"]),
            ],
        );
        let averages = football(&doc, "dolphins");
        assert_eq!(averages.games_played, 4);
        assert_eq!(averages.avg_rushing_yards, Some(50.0));
        assert_eq!(averages.avg_rushing_tds, Some(0.75));
        assert_eq!(averages.avg_rushing_attempts, Some(12.0));
        assert_eq!(averages.avg_receptions, Some(1.5));
        assert_eq!(averages.avg_receiving_yards, Some(12.5));
        assert_eq!(averages.avg_receiving_tds, Some(0.25));
        assert_eq!(averages.avg_passing_yards, Some(0.0));
        assert_eq!(averages.avg_sacks, None);
        assert_eq!(averages.avg_receiving_targets, None);
    }

    #[test]
    fn unparseable_column_is_null_not_zero() {
        let doc = document(
            &["CAR", "YDS", "TD"],
            &[
                ("1", "Dallas Cowboys", &["10", "44", "--"]),
                ("2", "Dallas Cowboys", &["8", "31", "--"]),
            ],
        );
        let averages = football(&doc, "cowboys");
        assert_eq!(averages.games_played, 2);
        assert_eq!(averages.avg_rushing_yards, Some(37.5));
        assert_eq!(averages.avg_rushing_tds, None);
        assert_eq!(averages.avg_passing_yards, None);
    }

    #[test]
    fn output_shape() {
        let doc = document(&["CAR", "YDS", "TD"], &[("1", "Dallas Cowboys", &["10", "44", "0"])]);
        let value = serde_json::to_value(aggregate(&doc, "dallas", Sport::Football).unwrap().averages)
            .unwrap();
        assert_eq!(value["games_played"], json!(1));
        assert_eq!(value["avg_rushing_yards"], json!(44.0));
        assert_eq!(value["avg_rushing_tds"], json!(0.0));
        assert_eq!(value["avg_passing_yards"], json!(null));
    }

    #[test]
    fn document_and_schema_failures() {
        let doc = document(&["MIN", "FG", "PTS"], &[("1", "Boston Celtics", &["30", "5-10", "14"])]);
        assert!(matches!(
            aggregate(&doc, "celtics", Sport::Basketball),
            Err(GamelogError::SchemaResolutionFailure { .. })
        ));
        // the same labels are fine for football, which just resolves nothing
        assert_eq!(
            aggregate(&doc, "celtics", Sport::Football)
                .unwrap()
                .averages
                .games_played(),
            1
        );

        let empty = Gamelog::default();
        assert_eq!(
            aggregate(&empty, "celtics", Sport::Football),
            Err(GamelogError::MalformedDocument("labels"))
        );
    }

    #[test]
    fn matchup_context() {
        let doc: Gamelog = serde_json::from_value(json!({
            "labels": ["MIN", "FG", "REB", "AST", "STL", "BLK", "PTS"],
            "events": {
                "1": { "atVs": "@", "gameResult": "W", "gameDate": "2023-11-02T00:00Z",
                       "opponent": { "displayName": "Denver Nuggets" } },
                "2": { "atVs": "vs", "gameResult": "L", "gameDate": "2024-03-09T01:30Z",
                       "opponent": { "displayName": "Denver Nuggets" } },
                "3": { "atVs": "vs", "gameResult": "W", "gameDate": "2024-04-01T01:30Z",
                       "opponent": { "displayName": "Denver Nuggets" } }
            },
            "seasonTypes": [
                { "categories": [{ "events": [
                    { "eventId": "1", "stats": ["33", "8-15", "9", "6", "1", "1", "21"] },
                    { "eventId": "2", "stats": ["36", "10-19", "7", "8", "2", "0", "27"] }
                ] }] },
                { "categories": [{ "events": [
                    { "eventId": "3", "stats": ["--", "", "", "", "", "", ""] }
                ] }] }
            ]
        }))
        .unwrap();
        let result = aggregate(&doc, "nuggets", Sport::Basketball).unwrap();
        assert_eq!(result.averages.games_played(), 2);
        assert_eq!(result.context.record.wins, 1);
        assert_eq!(result.context.record.losses, 1);
        assert_eq!(result.context.home_games, 1);
        assert_eq!(result.context.away_games, 1);
        assert_eq!(
            result.context.last_game_date,
            Some(Utc.with_ymd_and_hms(2024, 3, 9, 1, 30, 0).unwrap())
        );
    }

    #[test]
    fn breakdown_lists_resolved_columns() {
        let doc = document(
            &["CAR", "YDS", "TD"],
            &[
                ("1", "Dallas Cowboys", &["10", "44", "x"]),
                ("2", "New York Giants", &["8", "31", "0"]),
            ],
        );
        let games = breakdown(&doc, "cowboys", Sport::Football).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].event_id, "1");
        assert_eq!(
            games[0].values,
            vec![
                (Stat::RushingAttempts, Some(StatValue::Count(10))),
                (Stat::RushingYards, Some(StatValue::Count(44))),
                (Stat::RushingTouchdowns, None),
            ]
        );
    }

    fn nba_row() -> impl Strategy<Value = (bool, String, Vec<String>)> {
        (
            any::<bool>(),
            prop::sample::select(vec!["12", "35", "0", "--", ""]),
            prop::sample::select(vec!["4-9", "0-0", "x", "10-10"]),
            prop::collection::vec(prop::sample::select(vec!["0", "3", "11", "--", ""]), 6),
        )
            .prop_map(|(lakers, minutes, fg, rest)| {
                let mut stats = vec![minutes.to_owned(), fg.to_owned(), "1-2".to_owned()];
                stats.extend(rest.into_iter().map(str::to_owned));
                let opponent = if lakers {
                    "Los Angeles Lakers"
                } else {
                    "Golden State Warriors"
                };
                (lakers, opponent.to_owned(), stats)
            })
    }

    proptest! {
        #[test]
        fn games_played_counts_eligible_rows(rows in prop::collection::vec(nba_row(), 1..20)) {
            let games: Vec<(String, &str, Vec<&str>)> = rows
                .iter()
                .enumerate()
                .map(|(i, (_, opponent, stats))| {
                    (i.to_string(), opponent.as_str(), stats.iter().map(String::as_str).collect())
                })
                .collect();
            let borrowed: Vec<(&str, &str, &[&str])> = games
                .iter()
                .map(|(id, opponent, stats)| (id.as_str(), *opponent, stats.as_slice()))
                .collect();
            let expected = rows
                .iter()
                .filter(|(lakers, _, stats)| *lakers && !["0", "--", ""].contains(&stats[0].as_str()))
                .count() as u32;

            let doc = document(&NBA, &borrowed);
            let first = aggregate(&doc, "lakers", Sport::Basketball);
            let second = aggregate(&doc, "lakers", Sport::Basketball);
            prop_assert_eq!(first.as_ref().map(|r| r.averages.games_played()).ok(), Some(expected));
            prop_assert_eq!(
                serde_json::to_string(&first.unwrap().averages).unwrap(),
                serde_json::to_string(&second.unwrap().averages).unwrap()
            );
        }
    }
}
