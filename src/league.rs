use crate::gamelog::GamelogError;
use derive_more::Display;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Sport {
    #[display(fmt = "basketball")]
    Basketball,
    #[display(fmt = "football")]
    Football,
}

impl FromStr for Sport {
    type Err = GamelogError;

    fn from_str(s: &str) -> Result<Sport, GamelogError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basketball" => Ok(Sport::Basketball),
            "football" => Ok(Sport::Football),
            _ => Err(GamelogError::UnsupportedSport(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum League {
    #[display(fmt = "nba")]
    Nba,
    #[display(fmt = "nfl")]
    Nfl,
}

impl League {
    pub(crate) fn sport(self) -> Sport {
        match self {
            League::Nba => Sport::Basketball,
            League::Nfl => Sport::Football,
        }
    }

    /// Path segment used by the upstream API, e.g. `basketball/nba`.
    pub(crate) fn sport_path(self) -> String {
        format!("{}/{}", self.sport(), self)
    }
}

impl FromStr for League {
    type Err = GamelogError;

    fn from_str(s: &str) -> Result<League, GamelogError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nba" => Ok(League::Nba),
            "nfl" => Ok(League::Nfl),
            _ => Err(GamelogError::UnsupportedSport(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{League, Sport};
    use crate::gamelog::GamelogError;

    #[test]
    fn parse() {
        assert_eq!("NBA".parse(), Ok(League::Nba));
        assert_eq!(" nfl ".parse(), Ok(League::Nfl));
        assert_eq!(
            "mlb".parse::<League>(),
            Err(GamelogError::UnsupportedSport("mlb".into()))
        );
        assert_eq!("Football".parse(), Ok(Sport::Football));
        assert!("hockey".parse::<Sport>().is_err());
    }

    #[test]
    fn paths() {
        assert_eq!(League::Nba.sport_path(), "basketball/nba");
        assert_eq!(League::Nfl.sport_path(), "football/nfl");
    }
}
