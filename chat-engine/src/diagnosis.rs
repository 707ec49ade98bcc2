//! Diagnosis assembly: fault match + drivability verdict + the rendered card.

use serde::Serialize;

use fault_kb::{
    DrivabilityAssessment, FaultCategory, FaultMatch, Severity, SymptomSet, Urgency,
    assess_drivability, match_fault,
};

/// Structured diagnosis returned alongside the rendered card text.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnosis {
    pub fault_category: FaultCategory,
    pub fault_type: String,
    pub severity: Severity,
    pub is_safe_to_drive: bool,
    pub urgency: Urgency,
    pub reason: String,
    /// Replacement parts usually involved; may be empty.
    pub parts: Vec<String>,
    /// Observed symptom flags, sorted for stable output.
    pub symptoms: Vec<String>,
}

impl Diagnosis {
    /// Builds a diagnosis from the detected category and observed symptoms.
    pub fn build(category: FaultCategory, symptoms: &SymptomSet) -> (Self, String) {
        let fault: FaultMatch = match_fault(category, symptoms);
        let drivability: DrivabilityAssessment = assess_drivability(symptoms);

        let card = render_card(category, &fault, &drivability);

        let mut observed: Vec<String> = symptoms.iter().cloned().collect();
        observed.sort();

        let diagnosis = Diagnosis {
            fault_category: category,
            fault_type: fault.fault_name,
            severity: fault.severity,
            is_safe_to_drive: drivability.is_drivable,
            urgency: drivability.urgency,
            reason: drivability.reason,
            parts: fault.parts,
            symptoms: observed,
        };
        (diagnosis, card)
    }
}

/// Renders the human-readable diagnosis card shown in the chat transcript.
fn render_card(
    category: FaultCategory,
    fault: &FaultMatch,
    drivability: &DrivabilityAssessment,
) -> String {
    let verdict = if drivability.is_drivable {
        "Safe to drive to garage"
    } else {
        "NOT SAFE TO DRIVE"
    };

    let mut card = format!(
        "DIAGNOSIS COMPLETE\n\n\
         Fault Category: {category}\n\
         Fault Type: {}\n\
         Severity: {}\n\n\
         {verdict}\n\n\
         Assessment: {}\n\n\
         Instructions:",
        fault.fault_name, fault.severity, drivability.reason
    );
    for instruction in &drivability.instructions {
        card.push_str("\n   - ");
        card.push_str(instruction);
    }
    if !fault.parts.is_empty() {
        card.push_str("\n\nParts likely needed: ");
        card.push_str(&fault.parts.join(", "));
    }
    card
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symptoms(flags: &[&str]) -> SymptomSet {
        flags.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn card_reflects_not_drivable_verdict() {
        let (diagnosis, card) = Diagnosis::build(
            FaultCategory::Brake,
            &symptoms(&["soft_pedal", "brake_fluid_leak", "pedal_spongy", "brake_warning_light"]),
        );
        assert!(!diagnosis.is_safe_to_drive);
        assert_eq!(diagnosis.urgency, Urgency::Critical);
        assert!(card.contains("NOT SAFE TO DRIVE"));
        assert!(card.contains("Brake fluid leak"));
    }

    #[test]
    fn symptoms_are_sorted() {
        let (diagnosis, _) = Diagnosis::build(
            FaultCategory::Engine,
            &symptoms(&["steam", "engine_stopped", "coolant_leak_large"]),
        );
        let mut expected = diagnosis.symptoms.clone();
        expected.sort();
        assert_eq!(diagnosis.symptoms, expected);
    }
}
