use crate::config::Config;
use crate::feed::load_json;
use crate::league::League;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct RosterDocument {
    #[serde(default)]
    athletes: Athletes,
}

/// The roster endpoint nests athletes differently per sport: NBA rosters are a flat array, NFL
/// rosters are grouped by unit (`[{"position": "offense", "items": [..]}, ..]`), and some
/// responses wrap the list in `{"items": [..]}`.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "AthleteList")]
struct Athletes(Vec<Athlete>);

#[derive(Deserialize)]
#[serde(untagged)]
enum AthleteList {
    Grouped(Vec<Group>),
    Flat(Vec<Athlete>),
    Wrapped { items: Vec<Athlete> },
}

#[derive(Deserialize)]
struct Group {
    items: Vec<Athlete>,
}

impl From<AthleteList> for Athletes {
    fn from(list: AthleteList) -> Athletes {
        Athletes(match list {
            AthleteList::Grouped(groups) => groups.into_iter().flat_map(|g| g.items).collect(),
            AthleteList::Flat(athletes) | AthleteList::Wrapped { items: athletes } => athletes,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Athlete {
    id: String,
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    display_name: String,
    jersey: Option<String>,
    #[serde(default)]
    position: Position,
    age: Option<u32>,
    display_height: Option<String>,
    display_weight: Option<String>,
    status: Option<Status>,
}

/// Football rosters give a bare abbreviation (`"QB"`), basketball rosters an object.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "PositionRepr")]
pub(crate) struct Position {
    pub(crate) name: String,
    pub(crate) abbreviation: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PositionRepr {
    Abbreviation(String),
    Full {
        #[serde(default)]
        name: String,
        #[serde(default)]
        abbreviation: String,
    },
}

impl From<PositionRepr> for Position {
    fn from(repr: PositionRepr) -> Position {
        match repr {
            PositionRepr::Abbreviation(abbreviation) => Position {
                name: abbreviation.clone(),
                abbreviation,
            },
            PositionRepr::Full { name, abbreviation } => Position { name, abbreviation },
        }
    }
}

#[derive(Debug, Deserialize)]
struct Status {
    #[serde(default)]
    name: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct RosterEntry {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) jersey: Option<String>,
    pub(crate) position: Position,
    pub(crate) age: Option<u32>,
    pub(crate) height: Option<String>,
    pub(crate) weight: Option<String>,
    pub(crate) status: Option<String>,
}

impl From<Athlete> for RosterEntry {
    fn from(athlete: Athlete) -> RosterEntry {
        RosterEntry {
            name: if athlete.full_name.is_empty() {
                athlete.display_name
            } else {
                athlete.full_name
            },
            id: athlete.id,
            jersey: athlete.jersey,
            position: athlete.position,
            age: athlete.age,
            height: athlete.display_height,
            weight: athlete.display_weight,
            status: athlete.status.map(|s| s.name).filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Roster {
    pub(crate) league: League,
    pub(crate) team: String,
    pub(crate) team_id: u32,
    pub(crate) athletes: Vec<RosterEntry>,
}

pub(crate) fn roster_url(config: &Config, league: League, team_id: u32) -> String {
    format!(
        "{}/apis/site/v2/sports/{}/teams/{}/roster",
        config.espn_base.trim_end_matches('/'),
        league.sport_path(),
        team_id
    )
}

fn entries(document: RosterDocument) -> Vec<RosterEntry> {
    document.athletes.0.into_iter().map(RosterEntry::from).collect()
}

pub(crate) async fn load_roster(
    config: &Config,
    league: League,
    team_id: u32,
) -> Result<Vec<RosterEntry>> {
    let document = load_json(config, &roster_url(config, league, team_id)).await?;
    Ok(entries(document))
}
