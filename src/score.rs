//! Pure score calculator.
//!
//! Maps a record's [`Metadata`] to the (completeness, easiness, overall)
//! triple. Total over its input domain: every boolean and every categorical
//! value has a defined weight, unknown vocabulary falls back to 0.

use crate::types::record::{AccessMode, DetailLevel, Metadata};
use crate::types::scoring::Score;

fn weight(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

fn detail_weight(level: DetailLevel) -> f64 {
    match level {
        DetailLevel::Detailed => 1.0,
        DetailLevel::Summarized => 0.5,
        DetailLevel::Absent | DetailLevel::Unknown => 0.0,
    }
}

fn access_weight(mode: AccessMode) -> f64 {
    match mode {
        AccessMode::Direct => 1.0,
        AccessMode::ScrapeFriendly => 0.5,
        AccessMode::ScrapeDifficult => 0.25,
        AccessMode::Unknown => 0.0,
    }
}

/// How much of the expected payroll data the disclosure carries.
///
/// `has_position_field` is counted twice and `has_enrollment_field` carries
/// no weight; this reproduces the published index as deployed.
pub fn completeness_score(meta: &Metadata) -> f64 {
    (weight(meta.has_capacity_field)
        + weight(meta.has_position_field)
        + weight(meta.has_position_field)
        + detail_weight(meta.base_revenue_detail)
        + detail_weight(meta.other_revenue_detail)
        + detail_weight(meta.expenditure_detail))
        / 6.0
}

/// How hard the dataset is to obtain and machine-read.
pub fn easiness_score(meta: &Metadata) -> f64 {
    (weight(meta.no_login_required)
        + weight(meta.no_captcha_required)
        + access_weight(meta.access_mode)
        + weight(meta.consistent_format)
        + weight(meta.strictly_tabular))
        / 5.0
}

/// Compute the full score triple for one record's metadata.
pub fn calc_score(meta: &Metadata) -> Score {
    let completeness_score = completeness_score(meta);
    let easiness_score = easiness_score(meta);
    Score {
        completeness_score,
        easiness_score,
        overall_score: (completeness_score + easiness_score) / 2.0,
    }
}
