use crate::config::Config;
use crate::gamelog::Gamelog;
use crate::league::League;
use crate::CLIENT;
use anyhow::{ensure, Context, Result};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

pub(crate) fn valid_athlete_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

pub(crate) fn gamelog_url(config: &Config, league: League, athlete_id: &str) -> String {
    format!(
        "{}/apis/common/v3/sports/{}/athletes/{}/gamelog",
        config.espn_base.trim_end_matches('/'),
        league.sport_path(),
        athlete_id
    )
}

/// One GET, decoded as JSON. Non-success statuses become errors carrying the response body.
pub(crate) async fn load_json<T: DeserializeOwned>(config: &Config, url: &str) -> Result<T> {
    log::debug!("fetching {}", url);
    let response = CLIENT
        .get(url)
        .header(ACCEPT, "application/json")
        .timeout(config.feed_timeout())
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log::error!("{} returned {}", url, status);
        anyhow::bail!("upstream returned {}: {}", status, body);
    }

    response
        .json()
        .await
        .with_context(|| format!("failed to decode response from {}", url))
}

/// Fetches an athlete's full game log. The document is returned as-is; checking it is the
/// caller's business.
pub(crate) async fn load_gamelog(
    config: &Config,
    league: League,
    athlete_id: &str,
) -> Result<Gamelog> {
    ensure!(
        valid_athlete_id(athlete_id),
        "invalid athlete id {:?}",
        athlete_id
    );
    load_json(config, &gamelog_url(config, league, athlete_id)).await
}
