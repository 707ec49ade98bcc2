//! Symptom-to-fault matching inside a detected category.

use serde::Serialize;
use tracing::debug;

use crate::SymptomSet;
use crate::catalog::{FaultCategory, Severity, entry};

/// Minimum share of a record's required symptoms that must be observed for
/// the record to match.
const MATCH_THRESHOLD: f64 = 0.6;

/// Result of matching an observed symptom set against the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct FaultMatch {
    pub fault_name: String,
    pub severity: Severity,
    pub drivable: bool,
    pub reason: String,
    /// Replacement parts usually involved; empty when unknown or none.
    pub parts: Vec<String>,
}

/// Matches observed symptoms to the closest fault record in `category`.
///
/// Severities are checked worst-first (Major → Moderate → Minor) and within
/// a severity the records are checked in declaration order; the first record
/// whose required symptom overlap reaches 60% wins. When nothing reaches the
/// threshold a generic "{category} system issue" fallback is returned, so
/// callers always get a usable diagnosis.
pub fn match_fault(category: FaultCategory, symptoms: &SymptomSet) -> FaultMatch {
    let cat = entry(category);

    for severity in Severity::MATCH_ORDER {
        for fault in cat.by_severity(severity) {
            let required = fault.symptoms.len();
            let observed = fault
                .symptoms
                .iter()
                .filter(|s| symptoms.contains(**s))
                .count();

            if observed as f64 >= required as f64 * MATCH_THRESHOLD {
                debug!(
                    category = %category,
                    fault = fault.name,
                    severity = %severity,
                    observed,
                    required,
                    "fault matched"
                );
                return FaultMatch {
                    fault_name: fault.name.to_string(),
                    severity,
                    drivable: fault.drivable,
                    reason: fault.reason.to_string(),
                    parts: fault.parts.iter().map(|p| p.to_string()).collect(),
                };
            }
        }
    }

    debug!(category = %category, "no fault reached threshold, using fallback");
    FaultMatch {
        fault_name: format!("{category} system issue"),
        severity: Severity::Moderate,
        drivable: true,
        reason: "Issue detected, recommend garage visit".to_string(),
        parts: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symptoms(flags: &[&str]) -> SymptomSet {
        flags.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn major_overheating_full_match() {
        let m = match_fault(
            FaultCategory::Engine,
            &symptoms(&["temp_light_red", "steam", "coolant_leak_large", "engine_stopped"]),
        );
        assert_eq!(m.fault_name, "Severe overheating - Radiator failure");
        assert_eq!(m.severity, Severity::Major);
        assert!(!m.drivable);
    }

    #[test]
    fn sixty_percent_overlap_is_enough() {
        // 3 of 4 required symptoms (75%) for the radiator record.
        let m = match_fault(
            FaultCategory::Engine,
            &symptoms(&["temp_light_red", "steam", "engine_stopped"]),
        );
        assert_eq!(m.fault_name, "Severe overheating - Radiator failure");

        // 2 of 4 (50%) is below the threshold; with nothing else matching the
        // fallback record comes back.
        let m = match_fault(FaultCategory::Engine, &symptoms(&["temp_light_red", "steam"]));
        assert_eq!(m.fault_name, "Engine system issue");
        assert_eq!(m.severity, Severity::Moderate);
        assert!(m.drivable);
    }

    #[test]
    fn severity_order_prefers_major() {
        // soft_pedal appears in two Major brake records; the first declared
        // one (Brake fluid leak) must win even though a Minor record would
        // also partially match.
        let m = match_fault(
            FaultCategory::Brake,
            &symptoms(&["soft_pedal", "brake_warning_light", "pedal_spongy"]),
        );
        assert_eq!(m.fault_name, "Brake fluid leak");
        assert_eq!(m.severity, Severity::Major);
        assert!(!m.drivable);
    }

    #[test]
    fn minor_match_when_no_major_fits() {
        let m = match_fault(
            FaultCategory::Brake,
            &symptoms(&["squealing_light", "brake_works", "pedal_normal"]),
        );
        assert_eq!(m.fault_name, "Brake pad wear (early stage)");
        assert_eq!(m.severity, Severity::Minor);
        assert!(m.drivable);
        assert_eq!(m.parts, vec!["Brake pads".to_string()]);
    }

    #[test]
    fn empty_symptom_set_falls_back() {
        let m = match_fault(FaultCategory::Suspension, &SymptomSet::new());
        assert_eq!(m.fault_name, "Suspension system issue");
    }
}
