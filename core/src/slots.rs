//! Search intent extracted from user utterances.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role keywords: the model may answer with either a single phrase or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keywords {
    List(Vec<String>),
    Text(String),
}

impl Keywords {
    /// Lists are joined with a single space; plain text passes through.
    pub fn joined(&self) -> String {
        match self {
            Self::List(items) => items.join(" "),
            Self::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Keywords,
    Location,
    Remote,
    Days,
}

/// Slot mapping. A `None` field is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slots {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Keywords>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_remote"
    )]
    pub remote: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_days"
    )]
    pub days: Option<u32>,
}

impl Slots {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_none()
            && self.location.is_none()
            && self.remote.is_none()
            && self.days.is_none()
    }

    /// Overwrites every key present in `newer`; keys absent from it persist.
    pub fn merge(&mut self, newer: Slots) {
        if newer.keywords.is_some() {
            self.keywords = newer.keywords;
        }
        if newer.location.is_some() {
            self.location = newer.location;
        }
        if newer.remote.is_some() {
            self.remote = newer.remote;
        }
        if newer.days.is_some() {
            self.days = newer.days;
        }
    }

    /// Drops blank strings and empty keyword lists so they read as absent.
    pub fn without_blanks(mut self) -> Self {
        self.keywords = self.keywords.and_then(|kw| match kw {
            Keywords::List(items) => {
                let items: Vec<String> = items
                    .into_iter()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                (!items.is_empty()).then_some(Keywords::List(items))
            }
            Keywords::Text(text) => {
                let text = text.trim();
                (!text.is_empty()).then(|| Keywords::Text(text.to_string()))
            }
        });
        self.location = self
            .location
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        self
    }

    pub fn present(&self) -> Vec<SlotKind> {
        let mut kinds = Vec::with_capacity(4);
        if self.keywords.is_some() {
            kinds.push(SlotKind::Keywords);
        }
        if self.location.is_some() {
            kinds.push(SlotKind::Location);
        }
        if self.remote.is_some() {
            kinds.push(SlotKind::Remote);
        }
        if self.days.is_some() {
            kinds.push(SlotKind::Days);
        }
        kinds
    }
}

fn deserialize_remote<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(b)),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Ok(Some(true)),
            "false" | "no" => Ok(Some(false)),
            other => Err(de::Error::custom(format!("invalid remote flag '{other}'"))),
        },
        Some(other) => Err(de::Error::custom(format!("invalid remote flag {other}"))),
    }
}

fn deserialize_days<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid day count {n}"))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid day count '{s}'"))),
        Some(other) => Err(de::Error::custom(format!("invalid day count {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_keys_win_and_others_persist() {
        let mut slots = Slots {
            keywords: Some(Keywords::List(vec!["rust".into()])),
            location: Some("Berlin".into()),
            ..Default::default()
        };
        slots.merge(Slots {
            location: Some("Munich".into()),
            remote: Some(true),
            ..Default::default()
        });

        assert_eq!(slots.keywords, Some(Keywords::List(vec!["rust".into()])));
        assert_eq!(slots.location.as_deref(), Some("Munich"));
        assert_eq!(slots.remote, Some(true));
        assert_eq!(slots.days, None);
    }

    #[test]
    fn merging_empty_changes_nothing() {
        let mut slots = Slots {
            days: Some(7),
            ..Default::default()
        };
        let before = slots.clone();
        slots.merge(Slots::default());
        assert_eq!(slots, before);
    }

    #[test]
    fn parses_model_shapes() {
        let slots: Slots = serde_json::from_str(
            r#"{"keywords": "data engineer", "location": null, "remote": "Yes", "days": "14", "salary": 100}"#,
        )
        .unwrap();
        assert_eq!(slots.keywords, Some(Keywords::Text("data engineer".into())));
        assert_eq!(slots.location, None);
        assert_eq!(slots.remote, Some(true));
        assert_eq!(slots.days, Some(14));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(serde_json::from_str::<Slots>(r#"{"remote": "sometimes"}"#).is_err());
        assert!(serde_json::from_str::<Slots>(r#"{"days": -3}"#).is_err());
        assert!(serde_json::from_str::<Slots>(r#"{"location": ["a", "b"]}"#).is_err());
    }

    #[test]
    fn blank_values_read_as_absent() {
        let slots = Slots {
            keywords: Some(Keywords::List(vec!["  ".into(), "".into()])),
            location: Some("  Pune ".into()),
            ..Default::default()
        }
        .without_blanks();
        assert_eq!(slots.keywords, None);
        assert_eq!(slots.location.as_deref(), Some("Pune"));

        let blank = Slots {
            location: Some(String::new()),
            ..Default::default()
        }
        .without_blanks();
        assert!(blank.is_empty());
    }

    #[test]
    fn keywords_join_with_single_space() {
        let kw = Keywords::List(vec!["senior".into(), "rust".into(), "engineer".into()]);
        assert_eq!(kw.joined(), "senior rust engineer");
        assert_eq!(Keywords::Text("qa".into()).joined(), "qa");
    }

    #[test]
    fn snapshot_serializes_only_present_keys() {
        let slots = Slots {
            location: Some("Bangalore".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&slots).unwrap(),
            r#"{"location":"Bangalore"}"#
        );
        assert_eq!(slots.present(), vec![SlotKind::Location]);
    }
}
