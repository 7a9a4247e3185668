//! Resolve free-text assignee input to a known user.
//!
//! Matching is deliberately simple: an exact (case-insensitive) initials hit
//! wins, then a substring match in either direction against the name. There is
//! no scoring; when nothing qualifies the answer is "no match".

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::hue::Hue;
use crate::initials::extract_initials;

/// One known user, as the matcher sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub initials: String,
    pub hue: Hue,
}

impl RosterEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        initials: impl Into<String>,
        hue: Hue,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            initials: initials.into(),
            hue,
        }
    }

    /// Stored initials, or initials derived from the name when none are stored.
    pub fn effective_initials(&self) -> String {
        let stored = self.initials.trim();
        if stored.is_empty() {
            extract_initials(Some(&self.name), None)
        } else {
            stored.to_string()
        }
    }
}

/// Find the roster entry `input` refers to.
///
/// 1. exact initials, ignoring case
/// 2. `input` inside the name, or the name inside `input`, ignoring case
///
/// The first entry satisfying the earliest rule wins. Empty input never matches.
pub fn match_assignee<'a>(input: &str, roster: &'a [RosterEntry]) -> Option<&'a RosterEntry> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(entry) = roster
        .iter()
        .find(|entry| entry.effective_initials().to_lowercase() == needle)
    {
        trace!(id = %entry.id, "assignee matched by initials");
        return Some(entry);
    }

    let found = roster.iter().find(|entry| {
        let name = entry.name.trim().to_lowercase();
        !name.is_empty() && (name.contains(&needle) || needle.contains(&name))
    });
    if let Some(entry) = found {
        trace!(id = %entry.id, "assignee matched by name");
    }
    found
}
