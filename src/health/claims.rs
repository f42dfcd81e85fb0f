use crate::error::Error;
use crate::health::dataset::HealthDataSource;
use crate::health::types::Claim;
use crate::health::validation::require_non_empty;

/// Resolve a claim number to its record
pub fn get_claim(source: &dyn HealthDataSource, claim_number: &str) -> Result<Claim, Error> {
    let claim_number = require_non_empty("claim_number", claim_number)?;

    source
        .claim(claim_number)
        .ok_or_else(|| Error::NotFound(format!("claim with number {} not found", claim_number)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::dataset::Dataset;
    use crate::health::types::ClaimStatus;

    #[test]
    fn returns_approved_claim() {
        let claim = get_claim(&Dataset::mock(), "CLM123456").unwrap();

        assert_eq!(claim.claim_number.0, "CLM123456");
        assert_eq!(claim.status, ClaimStatus::Approved);
        assert_eq!(claim.total_amount, 1200.0);
        assert_eq!(claim.amount_covered, 1000.0);
        assert_eq!(claim.patient_responsibility, 200.0);
        assert_eq!(claim.provider_name, "Dr. Sarah Johnson");
    }

    #[test]
    fn repeated_lookups_return_identical_records() {
        let dataset = Dataset::mock();

        for id in ["CLM123456", "CLM789012"] {
            let first = get_claim(&dataset, id).unwrap();
            for _ in 0..3 {
                assert_eq!(get_claim(&dataset, id).unwrap(), first);
            }
        }
    }

    #[test]
    fn padded_claim_number_is_not_found() {
        for id in [" CLM123456", "CLM123456 ", " CLM789012\n"] {
            assert!(
                matches!(get_claim(&Dataset::mock(), id), Err(Error::NotFound(_))),
                "expected not found for {:?}",
                id
            );
        }
    }

    #[test]
    fn unknown_claim_is_not_found() {
        match get_claim(&Dataset::mock(), "NONEXISTENT") {
            Err(Error::NotFound(message)) => {
                assert_eq!(message, "claim with number NONEXISTENT not found")
            }
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[test]
    fn empty_claim_number_is_invalid_input() {
        assert!(matches!(
            get_claim(&Dataset::mock(), ""),
            Err(Error::InvalidInput(_))
        ));
    }
}
