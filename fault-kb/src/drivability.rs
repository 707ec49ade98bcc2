//! Drivability rule tiers and the safety assessment.
//!
//! Three static rule buckets checked in fixed priority order:
//! not-drivable → drivable-but-urgent → drivable-carefully. The first two
//! tiers require ALL of a rule's symptoms; the careful tier fires on ANY of
//! them. When no rule fires the default verdict is "safe to drive".

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::SymptomSet;

/// How soon the owner needs a garage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Urgency {
    Critical,
    Urgent,
    Soon,
    Normal,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Urgency::Critical => "Critical",
            Urgency::Urgent => "Urgent",
            Urgency::Soon => "Soon",
            Urgency::Normal => "Normal",
        };
        f.write_str(s)
    }
}

/// One (required-symptom-set, reason) pair inside a tier.
#[derive(Debug)]
pub struct DrivabilityRule {
    pub condition: &'static str,
    pub symptoms: &'static [&'static str],
    pub reason: &'static str,
}

/// Safety verdict for the accumulated symptom set.
#[derive(Debug, Clone, Serialize)]
pub struct DrivabilityAssessment {
    pub is_drivable: bool,
    pub urgency: Urgency,
    pub reason: String,
    pub instructions: Vec<String>,
}

/// Conditions under which the car must not be driven at all.
static NOT_DRIVABLE_IF: &[DrivabilityRule] = &[
    DrivabilityRule {
        condition: "Engine stopped + won't restart + steam",
        symptoms: &["engine_stopped", "wont_start", "steam"],
        reason: "Severe overheating - engine damage imminent",
    },
    DrivabilityRule {
        condition: "Brake pedal soft/spongy + brake fluid leak",
        symptoms: &["soft_pedal", "brake_fluid_leak"],
        reason: "Brake system failure - VERY DANGEROUS",
    },
    DrivabilityRule {
        condition: "Clutch completely failed + no movement",
        symptoms: &["no_gear_engagement", "engine_revs_no_movement"],
        reason: "Cannot transfer power to wheels",
    },
    DrivabilityRule {
        condition: "Battery dead + engine won't start",
        symptoms: &["no_crank", "no_lights", "no_dashboard"],
        reason: "No electrical power",
    },
    DrivabilityRule {
        condition: "Steering failure",
        symptoms: &["cannot_steer", "control_arm_broken"],
        reason: "Cannot control vehicle direction",
    },
    DrivabilityRule {
        condition: "Transmission seized",
        symptoms: &["stuck_in_gear", "cannot_shift_at_all"],
        reason: "Cannot change gears",
    },
];

/// The car can reach a garage, but only just.
static DRIVABLE_BUT_URGENT: &[DrivabilityRule] = &[
    DrivabilityRule {
        condition: "Overheating but engine running",
        symptoms: &["temp_high", "engine_running", "no_steam"],
        reason: "Can drive SHORT distance with AC off - URGENT",
    },
    DrivabilityRule {
        condition: "Brake pads completely worn (grinding)",
        symptoms: &["grinding_brakes", "brake_works"],
        reason: "Brakes work but metal-on-metal - drive SLOWLY",
    },
    DrivabilityRule {
        condition: "Alternator failed but battery has charge",
        symptoms: &["battery_light_on", "engine_running"],
        reason: "Battery will die soon - go to garage immediately",
    },
    DrivabilityRule {
        condition: "Clutch slipping badly",
        symptoms: &["clutch_slipping", "gears_still_engage"],
        reason: "Avoid hills, drive flat roads to garage",
    },
];

/// Drivable with care; any single symptom in a rule is enough.
static DRIVABLE_CAREFULLY: &[DrivabilityRule] = &[
    DrivabilityRule {
        condition: "Check engine light + engine running",
        symptoms: &["check_engine_light", "engine_running"],
        reason: "Engine has issue but runs - get diagnosed soon",
    },
    DrivabilityRule {
        condition: "Brake squealing but pedal normal",
        symptoms: &["brake_noise", "pedal_normal", "brake_works"],
        reason: "Worn pads, needs replacement but brakes work",
    },
    DrivabilityRule {
        condition: "AC not working",
        symptoms: &["no_cooling"],
        reason: "Comfort issue, doesn't affect safety",
    },
];

fn all_present(rule: &DrivabilityRule, symptoms: &SymptomSet) -> bool {
    rule.symptoms.iter().all(|s| symptoms.contains(*s))
}

fn any_present(rule: &DrivabilityRule, symptoms: &SymptomSet) -> bool {
    rule.symptoms.iter().any(|s| symptoms.contains(*s))
}

/// Assesses whether the car is safe to drive.
///
/// Tiers are checked in priority order and the first matching rule decides
/// the verdict; the instruction lists are canned per tier.
pub fn assess_drivability(symptoms: &SymptomSet) -> DrivabilityAssessment {
    for rule in NOT_DRIVABLE_IF {
        if all_present(rule, symptoms) {
            debug!(condition = rule.condition, "not-drivable rule fired");
            return DrivabilityAssessment {
                is_drivable: false,
                urgency: Urgency::Critical,
                reason: rule.reason.to_string(),
                instructions: vec![
                    "Do NOT attempt to drive".to_string(),
                    "Call roadside mechanic".to_string(),
                    "Stay away from vehicle if overheating".to_string(),
                ],
            };
        }
    }

    for rule in DRIVABLE_BUT_URGENT {
        if all_present(rule, symptoms) {
            debug!(condition = rule.condition, "urgent rule fired");
            return DrivabilityAssessment {
                is_drivable: true,
                urgency: Urgency::Urgent,
                reason: rule.reason.to_string(),
                instructions: vec![
                    "Drive to garage IMMEDIATELY".to_string(),
                    "SHORT distance only".to_string(),
                    "Avoid high speeds".to_string(),
                    "Turn off AC if overheating".to_string(),
                ],
            };
        }
    }

    for rule in DRIVABLE_CAREFULLY {
        if any_present(rule, symptoms) {
            debug!(condition = rule.condition, "careful rule fired");
            return DrivabilityAssessment {
                is_drivable: true,
                urgency: Urgency::Soon,
                reason: rule.reason.to_string(),
                instructions: vec![
                    "Drive carefully to garage".to_string(),
                    "Get it checked soon".to_string(),
                    "Monitor for changes".to_string(),
                ],
            };
        }
    }

    DrivabilityAssessment {
        is_drivable: true,
        urgency: Urgency::Normal,
        reason: "Minor issue, safe to drive".to_string(),
        instructions: vec![
            "Schedule garage visit".to_string(),
            "Normal driving is safe".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symptoms(flags: &[&str]) -> SymptomSet {
        flags.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn overheating_while_running_is_urgent() {
        let a = assess_drivability(&symptoms(&["temp_high", "engine_running", "no_steam"]));
        assert!(a.is_drivable);
        assert_eq!(a.urgency, Urgency::Urgent);
    }

    #[test]
    fn soft_pedal_with_leak_is_critical() {
        let a = assess_drivability(&symptoms(&["soft_pedal", "brake_fluid_leak"]));
        assert!(!a.is_drivable);
        assert_eq!(a.urgency, Urgency::Critical);
        assert_eq!(a.reason, "Brake system failure - VERY DANGEROUS");
    }

    #[test]
    fn squealing_with_normal_pedal_is_careful() {
        let a = assess_drivability(&symptoms(&["brake_noise", "pedal_normal", "brake_works"]));
        assert!(a.is_drivable);
        assert_eq!(a.urgency, Urgency::Soon);
    }

    #[test]
    fn careful_tier_matches_on_any_symptom() {
        // pedal_normal alone is enough for the second careful rule.
        let a = assess_drivability(&symptoms(&["pedal_normal"]));
        assert_eq!(a.urgency, Urgency::Soon);
    }

    #[test]
    fn critical_tier_wins_over_urgent() {
        // Symptom set satisfies both a not-drivable rule and an urgent rule;
        // priority order must pick Critical.
        let a = assess_drivability(&symptoms(&[
            "engine_stopped",
            "wont_start",
            "steam",
            "battery_light_on",
            "engine_running",
        ]));
        assert!(!a.is_drivable);
        assert_eq!(a.urgency, Urgency::Critical);
    }

    #[test]
    fn no_rule_means_normal() {
        let a = assess_drivability(&symptoms(&["window_not_moving"]));
        assert!(a.is_drivable);
        assert_eq!(a.urgency, Urgency::Normal);
    }

    #[test]
    fn partial_critical_set_does_not_fire() {
        // Two of the three battery symptoms: the ALL requirement keeps the
        // critical tier quiet.
        let a = assess_drivability(&symptoms(&["no_crank", "no_lights"]));
        assert_ne!(a.urgency, Urgency::Critical);
    }
}
