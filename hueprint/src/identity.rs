//! The three persisted avatar fields and the derivations built on them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{self, AvatarColors};
use crate::error::Result;
use crate::hue::{allocate_hue, Hue};
use crate::initials::extract_initials;
use crate::pattern::{self, PatternKind};

/// A user's stored visual identity.
///
/// Assigned once at creation and only changed by an explicit override. Read
/// paths derive colors and glyphs from these fields without recomputing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarIdentity {
    pub avatar_hue: Hue,
    pub avatar_pattern: String,
    pub initials: String,
}

impl AvatarIdentity {
    pub fn new(
        avatar_hue: Hue,
        avatar_pattern: impl Into<String>,
        initials: impl Into<String>,
    ) -> Self {
        Self {
            avatar_hue,
            avatar_pattern: avatar_pattern.into(),
            initials: initials.into(),
        }
    }

    /// Creation-time identity for a new user.
    ///
    /// `existing_hues` is the caller's snapshot of hues already in use. The
    /// user's id becomes the pattern seed.
    pub fn for_new_user(
        id: &str,
        name: Option<&str>,
        email: Option<&str>,
        existing_hues: &[Hue],
    ) -> Self {
        let identity = Self {
            avatar_hue: allocate_hue(existing_hues),
            avatar_pattern: id.to_string(),
            initials: extract_initials(name, email),
        };
        debug!(
            id,
            hue = %identity.avatar_hue,
            initials = %identity.initials,
            "derived identity for new user"
        );
        identity
    }

    /// Replace the hue, as an admin override would.
    pub fn with_hue(mut self, hue: Hue) -> Self {
        self.avatar_hue = hue;
        self
    }

    /// Replace the initials, as an admin override would.
    pub fn with_initials(mut self, initials: impl Into<String>) -> Self {
        self.initials = initials.into();
        self
    }

    pub fn colors(&self) -> AvatarColors {
        color::colors_for(self.avatar_hue)
    }

    pub fn pattern_kind(&self) -> PatternKind {
        pattern::pattern_kind(&self.avatar_pattern)
    }

    /// SVG glyph for this identity at `size` pixels.
    pub fn render(&self, size: u32) -> Result<String> {
        pattern::generate_pattern(&self.avatar_pattern, self.avatar_hue, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_first_user() {
        let identity = AvatarIdentity::for_new_user("u1", Some("John Smith"), None, &[]);
        assert_eq!(identity.avatar_hue, Hue::new(210));
        assert_eq!(identity.avatar_pattern, "u1");
        assert_eq!(identity.initials, "JS");
    }

    #[test_log::test]
    fn test_second_user_goes_opposite() {
        let first = AvatarIdentity::for_new_user("u1", Some("John Smith"), None, &[]);
        let second = AvatarIdentity::for_new_user(
            "u2",
            None,
            Some("jane@example.com"),
            &[first.avatar_hue],
        );
        assert_eq!(second.avatar_hue, Hue::new(30));
        assert_eq!(second.initials, "JA");
    }

    #[test]
    fn test_derivations_do_not_mutate() {
        let identity = AvatarIdentity::new(Hue::new(95), "seed-95", "AB");
        let before = identity.clone();
        let colors_a = identity.colors();
        let svg_a = identity.render(32).unwrap();
        let colors_b = identity.colors();
        let svg_b = identity.render(32).unwrap();
        assert_eq!(identity, before);
        assert_eq!(colors_a, colors_b);
        assert_eq!(svg_a, svg_b);
    }

    #[test]
    fn test_overrides() {
        let identity = AvatarIdentity::for_new_user("u1", Some("John Smith"), None, &[])
            .with_hue(Hue::new(5))
            .with_initials("J");
        assert_eq!(identity.avatar_hue, Hue::new(5));
        assert_eq!(identity.initials, "J");
        assert_eq!(identity.avatar_pattern, "u1");
    }

    #[test]
    fn test_render_rejects_zero() {
        let identity = AvatarIdentity::new(Hue::new(1), "x", "X");
        assert!(identity.render(0).is_err());
    }

    #[test]
    fn test_serde_field_names() {
        let identity = AvatarIdentity::new(Hue::new(12), "u1", "JS");
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["avatar_hue"], 12);
        assert_eq!(json["avatar_pattern"], "u1");
        assert_eq!(json["initials"], "JS");
    }
}
