//! Fixed in-memory health dataset and the read-only source trait handlers use.

use crate::config::ValidationMode;
use crate::error::Error;
use crate::health::types::{BenefitLine, Claim, ClaimNumber, ClaimStatus, PlanId, Provider};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Read-only access to claims, plan benefits and providers
#[cfg_attr(test, mockall::automock)]
pub trait HealthDataSource: Send + Sync {
    fn claim(&self, claim_number: &str) -> Option<Claim>;

    /// Benefit lines of a plan in declaration order, `None` for unknown plans
    fn plan_benefits(&self, plan_id: &str) -> Option<Vec<BenefitLine>>;

    /// All providers in listing order
    fn providers(&self) -> Vec<Provider>;

    fn counts(&self) -> DatasetCounts;
}

/// Number of records held, per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetCounts {
    pub claims: usize,
    pub plans: usize,
    pub providers: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    claims: HashMap<ClaimNumber, Claim>,
    plans: HashMap<PlanId, Vec<BenefitLine>>,
    providers: Vec<Provider>,
    duplicate_claims: Vec<ClaimNumber>,
}

impl Dataset {
    /// Build a dataset. A repeated claim number keeps its last record and is
    /// reported by `validate`.
    pub fn new(
        claims: Vec<Claim>,
        plans: Vec<(PlanId, Vec<BenefitLine>)>,
        providers: Vec<Provider>,
    ) -> Self {
        let mut by_number = HashMap::with_capacity(claims.len());
        let mut duplicate_claims = Vec::new();
        for claim in claims {
            let number = claim.claim_number.clone();
            let replaced = by_number.insert(number.clone(), claim).is_some();
            if replaced && !duplicate_claims.contains(&number) {
                duplicate_claims.push(number);
            }
        }
        duplicate_claims.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            claims: by_number,
            plans: plans.into_iter().collect(),
            providers,
            duplicate_claims,
        }
    }

    /// Claim numbers whose amounts break the covered + patient <= total rule, sorted
    pub fn inconsistent_claims(&self) -> Vec<&ClaimNumber> {
        let mut bad: Vec<&ClaimNumber> = self
            .claims
            .values()
            .filter(|claim| !claim.amounts_consistent())
            .map(|claim| &claim.claim_number)
            .collect();
        bad.sort_by(|a, b| a.0.cmp(&b.0));
        bad
    }

    /// Claim numbers that appeared more than once in the input, sorted
    pub fn duplicate_claims(&self) -> &[ClaimNumber] {
        &self.duplicate_claims
    }

    /// Check claim amounts and claim number uniqueness according to `mode`.
    /// Only `Strict` can fail.
    pub fn validate(&self, mode: ValidationMode) -> Result<(), Error> {
        if mode == ValidationMode::Off {
            return Ok(());
        }

        let mut problems = Vec::new();

        let bad = self.inconsistent_claims();
        if !bad.is_empty() {
            problems.push(format!(
                "{} claim(s) have covered + patient amounts above total: {}",
                bad.len(),
                join_numbers(bad.iter().copied())
            ));
        }

        if !self.duplicate_claims.is_empty() {
            problems.push(format!(
                "{} claim number(s) listed more than once: {}",
                self.duplicate_claims.len(),
                join_numbers(self.duplicate_claims.iter())
            ));
        }

        if problems.is_empty() {
            tracing::debug!(claims = self.claims.len(), "Claim table validated");
            return Ok(());
        }

        match mode {
            ValidationMode::Strict => Err(Error::Dataset(problems.join("; "))),
            _ => {
                for problem in &problems {
                    tracing::warn!(%problem, "Claim table inconsistent");
                }
                Ok(())
            }
        }
    }

    /// The fixed mock table served by the binary
    pub fn mock() -> Self {
        Self::new(mock_claims(), mock_plans(), mock_providers())
    }
}

impl HealthDataSource for Dataset {
    fn claim(&self, claim_number: &str) -> Option<Claim> {
        self.claims.get(claim_number).cloned()
    }

    fn plan_benefits(&self, plan_id: &str) -> Option<Vec<BenefitLine>> {
        self.plans.get(plan_id).cloned()
    }

    fn providers(&self) -> Vec<Provider> {
        self.providers.clone()
    }

    fn counts(&self) -> DatasetCounts {
        DatasetCounts {
            claims: self.claims.len(),
            plans: self.plans.len(),
            providers: self.providers.len(),
        }
    }
}

fn join_numbers<'a>(numbers: impl Iterator<Item = &'a ClaimNumber>) -> String {
    numbers.map(|n| n.0.as_str()).collect::<Vec<_>>().join(", ")
}

// ============================================================================
// Mock data
// ============================================================================

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn mock_claims() -> Vec<Claim> {
    vec![
        Claim {
            claim_number: ClaimNumber("CLM123456".to_string()),
            status: ClaimStatus::Approved,
            date_of_service: date(2023, 10, 15),
            provider_name: "Dr. Sarah Johnson".to_string(),
            total_amount: 1200.00,
            amount_covered: 1000.00,
            patient_responsibility: 200.00,
            service_description: "Annual physical examination".to_string(),
        },
        Claim {
            claim_number: ClaimNumber("CLM789012".to_string()),
            status: ClaimStatus::Pending,
            date_of_service: date(2023, 11, 1),
            provider_name: "City Medical Center".to_string(),
            total_amount: 2500.00,
            amount_covered: 2000.00,
            patient_responsibility: 500.00,
            service_description: "MRI Scan".to_string(),
        },
    ]
}

fn benefit(service: &str, coverage: &str, limitations: &str) -> BenefitLine {
    BenefitLine {
        service: service.to_string(),
        coverage: coverage.to_string(),
        limitations: Some(limitations.to_string()),
    }
}

fn mock_plans() -> Vec<(PlanId, Vec<BenefitLine>)> {
    vec![
        (
            PlanId("PLAN001".to_string()),
            vec![
                benefit("Primary Care Visit", "$30 copay", "Up to 4 visits per year"),
                benefit("Specialist Visit", "$50 copay", "Requires referral"),
                benefit("Emergency Room", "$300 copay", "After deductible"),
                benefit(
                    "Prescription Drugs",
                    "Tier 1: $10, Tier 2: $30, Tier 3: $50",
                    "30-day supply",
                ),
            ],
        ),
        (
            PlanId("PLAN002".to_string()),
            vec![
                benefit("Primary Care Visit", "$20 copay", "Up to 6 visits per year"),
                benefit("Specialist Visit", "$40 copay", "No referral needed"),
                benefit("Emergency Room", "$250 copay", "After deductible"),
                benefit(
                    "Prescription Drugs",
                    "Tier 1: $5, Tier 2: $25, Tier 3: $45",
                    "90-day supply available",
                ),
            ],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn provider(
    name: &str,
    specialty: &str,
    address: &str,
    city: &str,
    state: &str,
    zip_code: &str,
    phone: &str,
    accepting_new_patients: bool,
    languages: &[&str],
) -> Provider {
    Provider {
        name: name.to_string(),
        specialty: specialty.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip_code.to_string(),
        phone: phone.to_string(),
        accepting_new_patients,
        languages: languages.iter().map(|l| l.to_string()).collect(),
    }
}

fn mock_providers() -> Vec<Provider> {
    vec![
        provider(
            "Dr. Sarah Johnson",
            "Family Medicine",
            "123 Health St, Suite 100",
            "New York",
            "NY",
            "10001",
            "(212) 555-0101",
            true,
            &["English", "Spanish"],
        ),
        provider(
            "Dr. Michael Chen",
            "Cardiology",
            "456 Heart Ave",
            "New York",
            "NY",
            "10001",
            "(212) 555-0202",
            false,
            &["English", "Mandarin"],
        ),
        provider(
            "Dr. Emily Wilson",
            "Pediatrics",
            "789 Child St",
            "Boston",
            "MA",
            "02108",
            "(617) 555-0303",
            true,
            &["English", "French"],
        ),
    ]
}
