//! Deterministic visual identities for users
//!
//! Every user gets a signature hue, a short set of initials and a seeded
//! geometric glyph, derived from three small stored fields. The same fields
//! always render the same way, on any machine.
//!
//! ## Overview
//!
//! - **Hue allocation** - new users land in the widest gap on the color wheel
//! - **Color derivation** - background, pastel, accent and contrast-text colors per hue
//! - **Initials** - Latin names give word initials, CJK names keep their first characters
//! - **Patterns** - a seed picks one of four SVG glyph styles, byte-for-byte reproducible
//! - **Assignee matching** - resolve typed text back to a known user
//!
//! Everything here is a pure function of its arguments: no I/O, no shared state.
//!
//! ## Basic Usage
//!
//! ```rust
//! use hueprint::{AvatarIdentity, Hue, match_assignee, RosterEntry};
//!
//! let existing = vec![Hue::new(210)];
//! let identity = AvatarIdentity::for_new_user("user-42", Some("Ada Lovelace"), None, &existing);
//! assert_eq!(identity.avatar_hue, Hue::new(30));
//! assert_eq!(identity.initials, "AL");
//!
//! let colors = identity.colors();
//! let svg = identity.render(48)?;
//! assert!(svg.starts_with("<svg"));
//!
//! let roster = vec![RosterEntry::new("user-42", "Ada Lovelace", "AL", identity.avatar_hue)];
//! assert_eq!(match_assignee("ada", &roster).map(|u| u.hue), Some(colors.hue));
//! # Ok::<(), hueprint::HueprintError>(())
//! ```

pub mod color;
mod error;
pub mod hue;
pub mod identity;
pub mod initials;
pub mod matcher;
pub mod pattern;

pub use color::{
    accent_text, background, colors_for, contrast_text, light_background, AvatarColors,
    ContrastText,
};
pub use error::{HueprintError, Result};
pub use hue::{allocate_hue, Hue};
pub use identity::AvatarIdentity;
pub use initials::extract_initials;
pub use matcher::{match_assignee, RosterEntry};
pub use pattern::{generate_pattern, pattern_kind, render_kind, PatternKind, PATTERN_VERSION};
