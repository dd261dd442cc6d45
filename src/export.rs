use crate::gamelog::aggregate::GameBreakdown;
use crate::gamelog::eligibility::StatValue;
use serde::ser::{Serialize, SerializeStruct, Serializer};

impl Serialize for StatValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            StatValue::Count(n) => serializer.serialize_i64(*n),
            StatValue::Split { made, attempted } => {
                serializer.collect_str(&format_args!("{}-{}", made, attempted))
            }
        }
    }
}

impl Serialize for GameBreakdown {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // the stat columns depend on the feed, so this would normally be `serialize_map`, but the
        // csv crate does not support maps. `serialize_struct` works because neither serde_json
        // nor csv look at the name, and csv ignores `len`.
        let mut s = serializer.serialize_struct("", 6 + self.values.len())?;
        s.serialize_field("event_id", &self.event_id)?;
        s.serialize_field("game_date", &self.game_date)?;
        s.serialize_field("opponent", &self.opponent)?;
        s.serialize_field("venue", &self.venue)?;
        s.serialize_field("result", &self.result)?;
        s.serialize_field("score", &self.score)?;
        for (stat, value) in &self.values {
            s.serialize_field(stat.key(), value)?;
        }
        s.end()
    }
}
