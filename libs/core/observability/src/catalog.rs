//! Catalog operation metrics.

use metrics::{counter, histogram};

/// Result of a catalog operation, used as the `outcome` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NotFound,
    Conflict,
    Invalid,
    Error,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::NotFound => "not_found",
            Outcome::Conflict => "conflict",
            Outcome::Invalid => "invalid",
            Outcome::Error => "error",
        }
    }
}

pub struct CatalogMetrics;

impl CatalogMetrics {
    /// `catalog_operations_total{entity, operation, outcome}`
    pub fn record_operation(entity: &'static str, operation: &'static str, outcome: Outcome) {
        counter!(
            "catalog_operations_total",
            "entity" => entity,
            "operation" => operation,
            "outcome" => outcome.as_str()
        )
        .increment(1);
    }

    /// `catalog_page_rows{entity}`
    pub fn record_page(entity: &'static str, rows: u64) {
        histogram!("catalog_page_rows", "entity" => entity).record(rows as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::Success.as_str(), "success");
        assert_eq!(Outcome::NotFound.as_str(), "not_found");
        assert_eq!(Outcome::Conflict.as_str(), "conflict");
    }

    #[test]
    fn test_recording_without_recorder_is_a_noop() {
        CatalogMetrics::record_operation("product", "delete", Outcome::Success);
        CatalogMetrics::record_page("product", 5);
    }
}
