use crate::config::Config;
use crate::csv::Csv;
use crate::feed;
use crate::gamelog::{self, aggregate::GameBreakdown};
use crate::routes::player::athlete;
use crate::routes::{ApiKey, ResponseResult};
use rocket::{get, State};

#[get("/player/<league>/<athlete_id>/stats-vs/<opponent>/games.csv")]
pub async fn games_csv(
    _key: ApiKey,
    config: &State<Config>,
    league: &str,
    athlete_id: &str,
    opponent: &str,
) -> ResponseResult<Csv<GameBreakdown>> {
    let league = athlete(league, athlete_id)?;
    let doc = feed::load_gamelog(config, league, athlete_id).await?;
    let games = gamelog::breakdown(&doc, opponent, league.sport())?;
    Ok(Csv::attachment(
        games,
        &format!("{}-{}-vs-{}", league, athlete_id, opponent),
    ))
}
