use crate::config::Config;
use crate::league::League;
use crate::roster::{self, Roster};
use crate::routes::{ApiError, ApiKey, ResponseResult};
use crate::teams;
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/league/<league>/<team>/roster")]
pub async fn team_roster(
    _key: ApiKey,
    config: &State<Config>,
    league: &str,
    team: &str,
) -> ResponseResult<Json<Roster>> {
    let league = league.parse::<League>()?;
    let team_id = teams::team_id(league, team)
        .ok_or_else(|| ApiError::NotFound(format!("unknown team: {}", team)))?;
    let athletes = roster::load_roster(config, league, team_id).await?;
    Ok(Json(Roster {
        league,
        team: team.trim().to_lowercase(),
        team_id,
        athletes,
    }))
}
