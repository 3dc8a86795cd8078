use mazer_core::Point;
use thiserror::Error;

/// A search was asked for endpoints outside the [`PathRange`](crate::PathRange).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("start {0} is outside the search range")]
    StartOutOfRange(Point),
    #[error("goal {0} is outside the search range")]
    GoalOutOfRange(Point),
}

/// A heuristic name that is not one of the known strategies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid heuristic \u{201c}{0}\u{201d}: choose 'manhattan' or 'euclidean'")]
pub struct UnknownHeuristic(pub String);
