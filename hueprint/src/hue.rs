//! Hue values and maximal-gap hue allocation.
//!
//! Hues live on a circle of circumference 360. A new user's hue is placed at
//! the midpoint of the widest gap between hues already in use, so colors stay
//! spread out as the population grows. Hues are never rebalanced afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, trace};

use crate::error::{HueprintError, Result};

/// Degrees on the hue circle.
const CIRCLE: u16 = 360;

/// A position on the HSL hue circle, always in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Hue(u16);

impl Hue {
    /// Hue handed to the very first user. Pinned so allocation stays reproducible.
    pub const DEFAULT_ANCHOR: Hue = Hue(210);

    /// Create a hue from any integer degree, wrapping into `[0, 360)`.
    pub fn new(degrees: i64) -> Self {
        Self(degrees.rem_euclid(CIRCLE as i64) as u16)
    }

    /// Create a hue from a floating point degree, rounding to the nearest degree.
    pub fn try_from_f64(degrees: f64) -> Result<Self> {
        if !degrees.is_finite() {
            return Err(HueprintError::invalid_hue(degrees));
        }
        Ok(Self::new(degrees.round() as i64))
    }

    /// The hue in whole degrees
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Shortest angular distance between two hues, in `[0, 180]`.
    pub fn circular_distance(self, other: Hue) -> u16 {
        let diff = self.0.abs_diff(other.0);
        diff.min(CIRCLE - diff)
    }

    /// The hue on the opposite side of the wheel
    pub fn opposite(self) -> Hue {
        Hue::new(self.0 as i64 + 180)
    }
}

impl Default for Hue {
    fn default() -> Self {
        Self::DEFAULT_ANCHOR
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for Hue {
    fn from(degrees: u16) -> Self {
        Self::new(degrees as i64)
    }
}

impl From<Hue> for u16 {
    fn from(hue: Hue) -> Self {
        hue.0
    }
}

impl FromStr for Hue {
    type Err = HueprintError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(Hue::new)
            .map_err(|_| HueprintError::invalid_hue(s))
    }
}

impl<'de> Deserialize<'de> for Hue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let degrees = i64::deserialize(deserializer)?;
        Ok(Hue::new(degrees))
    }
}

/// Pick the hue farthest from every hue already in use.
///
/// Sorts the existing hues and returns the midpoint of the widest circular gap.
/// When several gaps are equally wide the first one in ascending order wins,
/// so the result depends only on the set of inputs. An empty input returns
/// [`Hue::DEFAULT_ANCHOR`]; a single hue `h` yields `h + 180`.
pub fn allocate_hue(existing: &[Hue]) -> Hue {
    if existing.is_empty() {
        debug!(hue = %Hue::DEFAULT_ANCHOR, "no existing hues, using anchor");
        return Hue::DEFAULT_ANCHOR;
    }

    let mut sorted: Vec<u16> = existing.iter().map(|h| h.degrees()).collect();
    sorted.sort_unstable();

    let mut best_start = sorted[0];
    let mut best_gap = 0u16;

    for (i, &start) in sorted.iter().enumerate() {
        let end = match sorted.get(i + 1) {
            Some(&next) => next,
            None => sorted[0] + CIRCLE,
        };
        let gap = end - start;
        trace!(start, end, gap, "hue gap");
        // Strictly greater keeps the first of equally wide gaps.
        if gap > best_gap {
            best_gap = gap;
            best_start = start;
        }
    }

    let hue = Hue::new(best_start as i64 + (best_gap / 2) as i64);
    debug!(
        existing = existing.len(),
        gap = best_gap,
        %hue,
        "allocated hue"
    );
    hue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hues(values: &[u16]) -> Vec<Hue> {
        values.iter().copied().map(Hue::from).collect()
    }

    #[test]
    fn test_empty_uses_anchor() {
        assert_eq!(allocate_hue(&[]), Hue::new(210));
    }

    #[test]
    fn test_single_hue_goes_opposite() {
        assert_eq!(allocate_hue(&hues(&[210])), Hue::new(30));
        assert_eq!(allocate_hue(&hues(&[0])), Hue::new(180));
        assert_eq!(allocate_hue(&hues(&[300])), Hue::new(120));
    }

    #[test]
    fn test_equal_gaps_pick_first_in_sorted_order() {
        assert_eq!(allocate_hue(&hues(&[0, 120, 240])), Hue::new(60));
        assert_eq!(allocate_hue(&hues(&[240, 0, 120])), Hue::new(60));
    }

    #[test]
    fn test_wraparound_gap() {
        // Widest gap runs from 100 through 360 back to 10.
        assert_eq!(allocate_hue(&hues(&[10, 100])), Hue::new(235));
        // Midpoint past 360 wraps.
        assert_eq!(allocate_hue(&hues(&[300, 320])), Hue::new(130));
        assert_eq!(allocate_hue(&hues(&[200, 350])), Hue::new(95));
    }

    #[test]
    fn test_duplicates_do_not_widen_gaps() {
        assert_eq!(
            allocate_hue(&hues(&[90, 90, 90])),
            allocate_hue(&hues(&[90]))
        );
        assert_eq!(allocate_hue(&hues(&[0, 0, 180])), Hue::new(90));
    }

    #[test]
    fn test_odd_gap_rounds_down() {
        assert_eq!(allocate_hue(&hues(&[0, 181])), Hue::new(90));
        assert_eq!(allocate_hue(&hues(&[0, 179])), Hue::new(269));
    }

    #[test]
    fn test_hue_normalizes() {
        assert_eq!(Hue::new(-30).degrees(), 330);
        assert_eq!(Hue::new(725).degrees(), 5);
        assert_eq!(Hue::new(360).degrees(), 0);
        assert_eq!(Hue::from(400u16).degrees(), 40);
    }

    #[test]
    fn test_try_from_f64() {
        assert_eq!(Hue::try_from_f64(59.6).unwrap(), Hue::new(60));
        assert_eq!(Hue::try_from_f64(-0.4).unwrap(), Hue::new(0));
        assert!(Hue::try_from_f64(f64::NAN).is_err());
        assert!(Hue::try_from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("210".parse::<Hue>().unwrap(), Hue::new(210));
        assert_eq!(" -90 ".parse::<Hue>().unwrap(), Hue::new(270));
        assert!(matches!(
            "teal".parse::<Hue>(),
            Err(HueprintError::InvalidHue { .. })
        ));
    }

    #[test]
    fn test_circular_distance() {
        assert_eq!(Hue::new(10).circular_distance(Hue::new(350)), 20);
        assert_eq!(Hue::new(0).circular_distance(Hue::new(180)), 180);
        assert_eq!(Hue::new(45).circular_distance(Hue::new(45)), 0);
        assert_eq!(Hue::new(30).opposite(), Hue::new(210));
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Hue::new(42)).unwrap();
        assert_eq!(json, "42");
        let hue: Hue = serde_json::from_str("-10").unwrap();
        assert_eq!(hue, Hue::new(350));
    }
}
