use serde::{Deserialize, Serialize};

/// Level of detail a disclosure publishes for a revenue or expense field.
///
/// Values outside the known vocabulary (including an unset field) decode to
/// `Unknown` rather than failing; the collector vocabulary has grown over
/// time and old records must keep decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetailLevel {
    Absent,
    Summarized,
    Detailed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// How the published dataset can be retrieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessMode {
    Direct,
    ScrapeFriendly,
    ScrapeDifficult,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Attributes describing how a monthly disclosure dataset was published.
///
/// Produced by the upstream collection process and stored as a JSON
/// document on the record; this tool only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub has_enrollment_field: bool,
    pub has_capacity_field: bool,
    pub has_position_field: bool,
    pub base_revenue_detail: DetailLevel,
    pub other_revenue_detail: DetailLevel,
    pub expenditure_detail: DetailLevel,
    pub no_login_required: bool,
    pub no_captcha_required: bool,
    pub access_mode: AccessMode,
    pub consistent_format: bool,
    pub strictly_tabular: bool,
}

/// One agency/year/month disclosure entry.
///
/// Identified by the (agency, year, month) triple. Metadata is absent when
/// the collection for that month failed or produced no data.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub agency_id: String,
    pub year: i64,
    pub month: i64,
    pub metadata: Option<Metadata>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_decodes_with_all_fields_present() {
        let meta: Metadata = serde_json::from_str(
            r#"{
                "has_enrollment_field": true,
                "has_capacity_field": true,
                "has_position_field": false,
                "base_revenue_detail": "DETAILED",
                "other_revenue_detail": "SUMMARIZED",
                "expenditure_detail": "ABSENT",
                "no_login_required": true,
                "no_captcha_required": false,
                "access_mode": "SCRAPE_FRIENDLY",
                "consistent_format": true,
                "strictly_tabular": false
            }"#,
        )
        .expect("full document should decode");

        assert!(meta.has_enrollment_field);
        assert_eq!(meta.base_revenue_detail, DetailLevel::Detailed);
        assert_eq!(meta.other_revenue_detail, DetailLevel::Summarized);
        assert_eq!(meta.expenditure_detail, DetailLevel::Absent);
        assert_eq!(meta.access_mode, AccessMode::ScrapeFriendly);
    }

    #[test]
    fn unrecognized_categorical_values_decode_to_unknown() {
        let meta: Metadata = serde_json::from_str(
            r#"{
                "base_revenue_detail": "PARTIAL",
                "access_mode": "REQUIRES_USER_SIMULATION"
            }"#,
        )
        .expect("unknown vocabulary should not fail decoding");

        assert_eq!(meta.base_revenue_detail, DetailLevel::Unknown);
        assert_eq!(meta.access_mode, AccessMode::Unknown);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let meta: Metadata = serde_json::from_str("{}").expect("empty document should decode");

        assert!(!meta.no_login_required);
        assert_eq!(meta.expenditure_detail, DetailLevel::Unknown);
        assert_eq!(meta.access_mode, AccessMode::Unknown);
    }
}
