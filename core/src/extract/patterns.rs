//! Deterministic phrasings recognized without calling the model.
//!
//! Place names are limited to ASCII letters and spaces. A place that runs into
//! any other letter (e.g. "São Paulo") does not match, so such requests fall
//! through to the model.

use crate::slots::{Keywords, Slots};
use regex::Regex;
use std::sync::LazyLock;

static ROLE_IN_PLACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(.*) jobs in ([A-Za-z ]+)(?:[^\p{L}]|$)").expect("role pattern is valid")
});

static IN_PLACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bin ([A-Za-z ]+)(?:[^\p{L}]|$)").expect("place pattern is valid")
});

/// `"<role> jobs in <place>"`, then `"in <place>"`. First match wins.
pub fn match_patterns(utterance: &str) -> Option<Slots> {
    role_in_place(utterance).or_else(|| place_only(utterance))
}

fn role_in_place(utterance: &str) -> Option<Slots> {
    let caps = ROLE_IN_PLACE.captures(utterance)?;
    let role = caps.get(1)?.as_str().trim();
    let place = caps.get(2)?.as_str().trim();
    if role.is_empty() || place.is_empty() {
        return None;
    }

    Some(Slots {
        keywords: Some(Keywords::List(vec![role.to_string()])),
        location: Some(place.to_string()),
        ..Default::default()
    })
}

fn place_only(utterance: &str) -> Option<Slots> {
    let caps = IN_PLACE.captures(utterance)?;
    let place = caps.get(1)?.as_str().trim();
    if place.is_empty() {
        return None;
    }

    Some(Slots {
        location: Some(place.to_string()),
        ..Default::default()
    })
}
