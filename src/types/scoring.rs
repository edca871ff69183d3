use serde::{Deserialize, Serialize};

/// The computed transparency index triple.
///
/// Derived purely from [`Metadata`](crate::types::record::Metadata); never
/// user-supplied. Each component lies in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub completeness_score: f64,
    pub easiness_score: f64,
    pub overall_score: f64,
}
