use std::fmt;
use std::str::FromStr;

use mazer_core::Point;

use crate::error::UnknownHeuristic;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy)
}

/// Distance estimate used to guide A*.
///
/// Both variants are admissible for 4-directional unit-cost movement, so
/// either yields a shortest path. Manhattan is exact on an open grid and
/// usually expands fewer nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "lowercase", try_from = "String")
)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    /// All selectable heuristics.
    pub const ALL: [Heuristic; 2] = [Heuristic::Manhattan, Heuristic::Euclidean];

    /// Estimated remaining distance from `from` to `to`. Never negative.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f64 {
        match self {
            Heuristic::Manhattan => f64::from(manhattan(from, to)),
            Heuristic::Euclidean => euclidean(from, to),
        }
    }

    /// Lowercase selector name.
    pub const fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownHeuristic(s.to_string()))
    }
}

impl TryFrom<String> for Heuristic {
    type Error = UnknownHeuristic;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::row_col(0, 0);
        let b = Point::row_col(3, 4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(Heuristic::Manhattan.estimate(b, a), 7.0);
        assert_eq!(Heuristic::Euclidean.estimate(b, a), 5.0);
        assert_eq!(Heuristic::Euclidean.estimate(a, a), 0.0);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        let goal = Point::new(5, 5);
        for p in mazer_core::Range::new(0, 0, 11, 11) {
            assert!(euclidean(p, goal) <= f64::from(manhattan(p, goal)));
        }
    }

    #[test]
    fn parse_selector() {
        assert_eq!("manhattan".parse::<Heuristic>(), Ok(Heuristic::Manhattan));
        assert_eq!("Euclidean".parse::<Heuristic>(), Ok(Heuristic::Euclidean));
        assert_eq!(Heuristic::Euclidean.to_string(), "euclidean");
    }

    #[test]
    fn unknown_selector_names_the_value() {
        let err = "chebyshev".parse::<Heuristic>().unwrap_err();
        assert_eq!(err, UnknownHeuristic("chebyshev".to_string()));
        assert!(err.to_string().contains("chebyshev"));
    }
}
