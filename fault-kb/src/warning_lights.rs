//! Dashboard warning-light reference table.
//!
//! Used to turn warning lights reported by dashboard image analysis into
//! symptom flags and severity context.

use crate::catalog::{FaultCategory, Severity};

/// Reference entry for one dashboard warning light.
#[derive(Debug)]
pub struct WarningLight {
    pub name: &'static str,
    pub color: &'static str,
    pub category: FaultCategory,
    pub severity: Severity,
    pub meaning: &'static str,
    /// Symptom flag noted on the session when this light is seen lit.
    pub symptom: &'static str,
}

static WARNING_LIGHTS: &[WarningLight] = &[
    WarningLight {
        name: "Temperature Warning",
        color: "Red",
        category: FaultCategory::Engine,
        severity: Severity::Major,
        meaning: "Engine overheating - coolant system failure",
        symptom: "temp_light_on",
    },
    WarningLight {
        name: "Check Engine Light",
        color: "Yellow",
        category: FaultCategory::Engine,
        severity: Severity::Moderate,
        meaning: "Engine system issue - needs diagnosis",
        symptom: "check_engine_light",
    },
    WarningLight {
        name: "Battery Warning",
        color: "Red",
        category: FaultCategory::Electrical,
        severity: Severity::Major,
        meaning: "Alternator failure - battery not charging",
        symptom: "battery_light_on",
    },
    WarningLight {
        name: "Brake Warning",
        color: "Red",
        category: FaultCategory::Brake,
        severity: Severity::Major,
        meaning: "Brake system failure - brake fluid low",
        symptom: "brake_warning_light",
    },
    WarningLight {
        name: "Oil Pressure Warning",
        color: "Red",
        category: FaultCategory::Engine,
        severity: Severity::Major,
        meaning: "Low oil pressure - engine damage risk",
        symptom: "oil_pressure_low",
    },
    WarningLight {
        name: "ABS Warning",
        color: "Yellow",
        category: FaultCategory::Brake,
        severity: Severity::Moderate,
        meaning: "Anti-lock brake system fault",
        symptom: "abs_light_on",
    },
];

/// All known warning lights, for building vision prompts.
pub fn all() -> &'static [WarningLight] {
    WARNING_LIGHTS
}

/// Finds a warning light by its display name (case-insensitive, forgiving
/// about a trailing "light" suffix, which vision models add or drop freely).
pub fn warning_light_by_name(name: &str) -> Option<&'static WarningLight> {
    let needle = name.trim().to_ascii_lowercase();
    WARNING_LIGHTS.iter().find(|w| {
        let full = w.name.to_ascii_lowercase();
        full == needle
            || full.trim_end_matches(" light") == needle.trim_end_matches(" light")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_exact_and_suffix_tolerant() {
        assert!(warning_light_by_name("Check Engine Light").is_some());
        assert!(warning_light_by_name("check engine").is_some());
        assert!(warning_light_by_name("Battery Warning Light").is_some());
        assert!(warning_light_by_name("Fog Light").is_none());
    }

    #[test]
    fn table_names_are_unique_and_resolvable() {
        let lights = all();
        assert!(!lights.is_empty());
        for (i, light) in lights.iter().enumerate() {
            assert!(warning_light_by_name(light.name).is_some(), "{}", light.name);
            assert!(
                lights[..i].iter().all(|w| w.name != light.name),
                "duplicate name: {}",
                light.name
            );
        }
    }

    #[test]
    fn lights_map_to_known_symptoms() {
        let w = warning_light_by_name("Brake Warning").unwrap();
        assert_eq!(w.symptom, "brake_warning_light");
        assert_eq!(w.category, FaultCategory::Brake);
    }
}
