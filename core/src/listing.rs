use crate::traits::BoardId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single job posting as returned by one of the boards.
///
/// Boards disagree on field names, so the raw variants are kept side by side
/// and resolved through the accessor methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobListing {
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub location: Option<String>,
    /// Careerjet's name for `location`.
    #[serde(deserialize_with = "lenient_text")]
    pub locations: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub apply_url: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub url: Option<String>,
    /// Jooble's name for `url`.
    #[serde(deserialize_with = "lenient_text")]
    pub link: Option<String>,
    #[serde(skip)]
    pub source: Option<BoardId>,
}

impl JobListing {
    pub fn with_source(mut self, source: BoardId) -> Self {
        self.source = Some(source);
        self
    }

    /// Key used for deduplication: the apply URL when present, else the
    /// generic URL. Empty strings count as absent.
    pub fn identifying_url(&self) -> Option<&str> {
        non_empty(&self.apply_url)
            .or_else(|| non_empty(&self.url))
            .or_else(|| non_empty(&self.link))
    }

    pub fn display_title(&self) -> &str {
        non_empty(&self.title).unwrap_or("N/A")
    }

    pub fn display_company(&self) -> &str {
        non_empty(&self.company).unwrap_or("N/A")
    }

    pub fn display_location(&self) -> &str {
        non_empty(&self.location)
            .or_else(|| non_empty(&self.locations))
            .unwrap_or("N/A")
    }
}

/// Scalars are rendered as text; arrays, objects and null count as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
