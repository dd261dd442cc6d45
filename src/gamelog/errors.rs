use derive_more::Display;

/// Failures that make a whole game log unusable. Per-row and per-field problems never show up
/// here; they only shrink the set of values that get averaged.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub(crate) enum GamelogError {
    #[display(fmt = "unsupported sport: {}", _0)]
    UnsupportedSport(String),
    #[display(fmt = "required labels missing: {:?}", missing)]
    SchemaResolutionFailure { missing: Vec<&'static str> },
    #[display(fmt = "malformed game log: {}", _0)]
    MalformedDocument(&'static str),
}

impl std::error::Error for GamelogError {}

#[cfg(test)]
#[test]
fn messages() {
    assert_eq!(
        GamelogError::UnsupportedSport("hockey".into()).to_string(),
        "unsupported sport: hockey"
    );
    assert_eq!(
        GamelogError::SchemaResolutionFailure {
            missing: vec!["REB", "PTS"]
        }
        .to_string(),
        r#"required labels missing: ["REB", "PTS"]"#
    );
    assert_eq!(
        GamelogError::MalformedDocument("labels").to_string(),
        "malformed game log: labels"
    );
}
