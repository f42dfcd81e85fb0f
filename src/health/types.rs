use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

// ID types
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ClaimNumber(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PlanId(pub String);

impl Borrow<str> for ClaimNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PlanId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Denied,
    Paid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Claim {
    #[schemars(description = "Unique identifier for the claim")]
    pub claim_number: ClaimNumber,

    #[schemars(description = "Current status of the claim")]
    pub status: ClaimStatus,

    #[schemars(description = "Date when the service was provided (YYYY-MM-DD)")]
    pub date_of_service: NaiveDate,

    #[schemars(description = "Name of the healthcare provider")]
    pub provider_name: String,

    #[schemars(description = "Total claim amount")]
    pub total_amount: f64,

    #[schemars(description = "Amount covered by insurance")]
    pub amount_covered: f64,

    #[schemars(description = "Amount to be paid by patient")]
    pub patient_responsibility: f64,

    #[schemars(description = "Description of the service provided")]
    pub service_description: String,
}

impl Claim {
    /// Covered amount plus patient share never exceeds the total, and no
    /// amount is negative.
    pub fn amounts_consistent(&self) -> bool {
        let amounts = [
            self.total_amount,
            self.amount_covered,
            self.patient_responsibility,
        ];
        if amounts.iter().any(|a| !a.is_finite() || *a < 0.0) {
            return false;
        }

        // Tolerate float rounding on cent amounts
        self.amount_covered + self.patient_responsibility <= self.total_amount + 0.005
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BenefitLine {
    #[schemars(description = "Name of the medical service")]
    pub service: String,

    #[schemars(description = "Coverage details (e.g. '$30 copay')")]
    pub coverage: String,

    #[schemars(description = "Any limitations or restrictions")]
    pub limitations: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Provider {
    #[schemars(description = "Provider's full name")]
    pub name: String,

    #[schemars(description = "Medical specialty")]
    pub specialty: String,

    #[schemars(description = "Practice street address")]
    pub address: String,

    #[schemars(description = "City")]
    pub city: String,

    #[schemars(description = "State")]
    pub state: String,

    #[schemars(description = "ZIP code")]
    pub zip_code: String,

    #[schemars(description = "Contact phone number")]
    pub phone: String,

    #[schemars(description = "Whether the provider is accepting new patients")]
    pub accepting_new_patients: bool,

    #[schemars(description = "Languages spoken by the provider")]
    pub languages: Vec<String>,
}

/// Optional provider search filters. Absent or blank fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderQuery {
    /// Keep providers whose name contains this text, ignoring case
    pub provider_name: Option<String>,
    /// Keep providers whose ZIP code equals this value exactly
    pub zip_code: Option<String>,
}

impl ProviderQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            provider_name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn by_zip(zip_code: impl Into<String>) -> Self {
        Self {
            zip_code: Some(zip_code.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(total: f64, covered: f64, patient: f64) -> Claim {
        Claim {
            claim_number: ClaimNumber("CLM000001".to_string()),
            status: ClaimStatus::Paid,
            date_of_service: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            provider_name: "Test Clinic".to_string(),
            total_amount: total,
            amount_covered: covered,
            patient_responsibility: patient,
            service_description: "Lab work".to_string(),
        }
    }

    #[test]
    fn claim_serializes_with_upper_case_status_and_iso_date() {
        let json = serde_json::to_value(claim(100.0, 80.0, 20.0)).unwrap();

        assert_eq!(json["claim_number"], "CLM000001");
        assert_eq!(json["status"], "PAID");
        assert_eq!(json["date_of_service"], "2024-01-02");
        assert_eq!(json["total_amount"], 100.0);
    }

    #[test]
    fn claim_status_deserializes_from_upper_case() {
        let status: ClaimStatus = serde_json::from_str("\"DENIED\"").unwrap();
        assert_eq!(status, ClaimStatus::Denied);
    }

    #[test]
    fn amounts_consistent_accepts_exact_split() {
        assert!(claim(1200.0, 1000.0, 200.0).amounts_consistent());
        assert!(claim(100.0, 0.0, 0.0).amounts_consistent());
    }

    #[test]
    fn amounts_consistent_rejects_overrun_and_negatives() {
        assert!(!claim(100.0, 90.0, 20.0).amounts_consistent());
        assert!(!claim(100.0, -5.0, 20.0).amounts_consistent());
        assert!(!claim(f64::NAN, 0.0, 0.0).amounts_consistent());
    }

    #[test]
    fn benefit_line_without_limitations_serializes_null() {
        let line = BenefitLine {
            service: "Telehealth".to_string(),
            coverage: "$0 copay".to_string(),
            limitations: None,
        };

        let json = serde_json::to_value(&line).unwrap();
        assert!(json["limitations"].is_null());
    }

    #[test]
    fn provider_schema_describes_every_field() {
        let schema = serde_json::to_value(schemars::schema_for!(Provider)).unwrap();
        let properties = schema["properties"].as_object().unwrap();

        assert_eq!(properties["city"]["description"], "City");
        assert_eq!(properties["state"]["description"], "State");
        for (field, property) in properties {
            assert!(property.get("description").is_some(), "{} has no description", field);
        }
    }

    #[test]
    fn provider_query_constructors() {
        assert_eq!(
            ProviderQuery::by_name("chen").provider_name.as_deref(),
            Some("chen")
        );
        assert!(ProviderQuery::by_name("chen").zip_code.is_none());
        assert_eq!(ProviderQuery::by_zip("10001").zip_code.as_deref(), Some("10001"));
    }
}
