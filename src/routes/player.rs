use crate::config::Config;
use crate::feed::{self, valid_athlete_id};
use crate::gamelog::aggregate::MatchupContext;
use crate::gamelog::{self, AveragesResult};
use crate::league::League;
use crate::routes::{ApiError, ApiKey, ResponseResult};
use rocket::serde::json::Json;
use rocket::{get, State};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct OpponentSplit {
    athlete_id: String,
    league: League,
    opponent: String,
    #[serde(flatten)]
    context: MatchupContext,
    averages: AveragesResult,
}

/// Parses the path segments shared by every per-athlete route.
pub(super) fn athlete(league: &str, athlete_id: &str) -> ResponseResult<League> {
    let league = league.parse::<League>()?;
    if !valid_athlete_id(athlete_id) {
        return Err(ApiError::BadRequest(format!(
            "invalid athlete id {:?}",
            athlete_id
        )));
    }
    Ok(league)
}

#[get("/player/<league>/<athlete_id>/stats-vs/<opponent>")]
pub async fn stats_vs(
    _key: ApiKey,
    config: &State<Config>,
    league: &str,
    athlete_id: &str,
    opponent: &str,
) -> ResponseResult<Json<OpponentSplit>> {
    let league = athlete(league, athlete_id)?;
    let doc = feed::load_gamelog(config, league, athlete_id).await?;
    let aggregate = gamelog::aggregate(&doc, opponent, league.sport())?;
    log::debug!(
        "{} vs {:?}: {} eligible games",
        athlete_id,
        opponent,
        aggregate.averages.games_played()
    );
    Ok(Json(OpponentSplit {
        athlete_id: athlete_id.to_owned(),
        league,
        opponent: opponent.to_owned(),
        context: aggregate.context,
        averages: aggregate.averages,
    }))
}
