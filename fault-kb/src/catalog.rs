//! Fault catalog: categories, keyword triggers, and severity-partitioned
//! fault records.
//!
//! The data mirrors the workshop fault sheet for the Suzuki Alto. Each
//! category carries the keyword list used for first-message detection and
//! three record lists partitioned by severity. Records reference symptom
//! flags by name; the flags themselves are produced by the question flows in
//! `chat-engine` (and, for warning lights, by dashboard analysis).

use serde::Serialize;
use std::fmt;

/// Top-level vehicle subsystem label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FaultCategory {
    Engine,
    Electrical,
    Brake,
    Transmission,
    Suspension,
    Ac,
    Body,
}

impl FaultCategory {
    /// All categories in catalog declaration order.
    ///
    /// Detection scans in this order and the first keyword hit wins, so the
    /// order is part of the lookup contract.
    pub const ALL: [FaultCategory; 7] = [
        FaultCategory::Engine,
        FaultCategory::Electrical,
        FaultCategory::Brake,
        FaultCategory::Transmission,
        FaultCategory::Suspension,
        FaultCategory::Ac,
        FaultCategory::Body,
    ];

    /// Human-readable category name as it appears in diagnosis cards.
    pub fn name(self) -> &'static str {
        match self {
            FaultCategory::Engine => "Engine",
            FaultCategory::Electrical => "Electrical",
            FaultCategory::Brake => "Brake",
            FaultCategory::Transmission => "Transmission",
            FaultCategory::Suspension => "Suspension",
            FaultCategory::Ac => "AC",
            FaultCategory::Body => "Body",
        }
    }

    /// Parses a category from its display name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name().to_ascii_lowercase() == lower)
    }
}

impl fmt::Display for FaultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Severity bucket of a fault record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Minor,
    Moderate,
    Major,
}

impl Severity {
    /// Matching checks severities worst-first; first hit wins.
    pub const MATCH_ORDER: [Severity; 3] = [Severity::Major, Severity::Moderate, Severity::Minor];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Minor => "Minor",
            Severity::Moderate => "Moderate",
            Severity::Major => "Major",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fault entry: required symptom flags, drivability verdict, and the
/// canned explanation shown to the user. `parts` lists the replacement parts
/// usually involved; empty when the fix is an adjustment or cleaning.
#[derive(Debug)]
pub struct FaultRecord {
    pub name: &'static str,
    pub symptoms: &'static [&'static str],
    pub drivable: bool,
    pub reason: &'static str,
    pub parts: &'static [&'static str],
}

/// Catalog entry for one category: detection keywords plus fault records
/// partitioned by severity.
#[derive(Debug)]
pub struct CategoryEntry {
    pub category: FaultCategory,
    pub keywords: &'static [&'static str],
    pub minor: &'static [FaultRecord],
    pub moderate: &'static [FaultRecord],
    pub major: &'static [FaultRecord],
}

impl CategoryEntry {
    /// Fault records for one severity bucket.
    pub fn by_severity(&self, severity: Severity) -> &'static [FaultRecord] {
        match severity {
            Severity::Minor => self.minor,
            Severity::Moderate => self.moderate,
            Severity::Major => self.major,
        }
    }
}

/// Looks up the catalog entry for a category.
pub fn entry(category: FaultCategory) -> &'static CategoryEntry {
    match category {
        FaultCategory::Engine => &ENGINE,
        FaultCategory::Electrical => &ELECTRICAL,
        FaultCategory::Brake => &BRAKE,
        FaultCategory::Transmission => &TRANSMISSION,
        FaultCategory::Suspension => &SUSPENSION,
        FaultCategory::Ac => &AC,
        FaultCategory::Body => &BODY,
    }
}

/// Detects the fault category from a free-text message.
///
/// Lowercased substring scan over the per-category keyword lists, catalog
/// order, first hit wins. Returns `None` when nothing matches; the caller
/// then asks for clarification (or falls back to LLM extraction).
pub fn detect_category(message: &str) -> Option<FaultCategory> {
    let lower = message.to_lowercase();
    for category in FaultCategory::ALL {
        let e = entry(category);
        if e.keywords.iter().any(|kw| lower.contains(kw)) {
            tracing::debug!(category = %category, "category detected from keywords");
            return Some(category);
        }
    }
    None
}

/* ---------------------------------------------------------------------- */
/* Catalog data                                                           */
/* ---------------------------------------------------------------------- */

static ENGINE: CategoryEntry = CategoryEntry {
    category: FaultCategory::Engine,
    keywords: &[
        "overheating",
        "steam",
        "temperature",
        "coolant",
        "knocking",
        "shaking",
        "power",
        "misfiring",
        "check engine",
        "smoke",
    ],
    minor: &[
        FaultRecord {
            name: "Oil leak (Gasket)",
            symptoms: &["oil_spot_ground", "oil_smell"],
            drivable: true,
            reason: "Engine runs fine, just leaking slowly",
            parts: &["Valve cover gasket"],
        },
        FaultRecord {
            name: "Spark plug worn",
            symptoms: &["slight_misfire", "check_engine_light"],
            drivable: true,
            reason: "Engine still runs, just rough idle",
            parts: &["Spark plug set"],
        },
        FaultRecord {
            name: "Air filter clogged",
            symptoms: &["power_loss_gradual"],
            drivable: true,
            reason: "Reduced performance but car drives",
            parts: &["Air filter"],
        },
        FaultRecord {
            name: "Throttle body dirty",
            symptoms: &["rough_idle", "hesitation"],
            drivable: true,
            reason: "Car drives, just not smoothly",
            parts: &[],
        },
    ],
    moderate: &[
        FaultRecord {
            name: "Engine misfiring",
            symptoms: &["check_engine_light", "shaking", "engine_running"],
            drivable: true,
            reason: "Engine running despite misfire - can drive carefully",
            parts: &["Spark plug set", "Ignition coil"],
        },
        FaultRecord {
            name: "Coolant leak (small)",
            symptoms: &["coolant_leak_small", "temp_normal", "engine_running"],
            drivable: true,
            reason: "Leak is small, engine not overheating yet",
            parts: &["Coolant hose"],
        },
        FaultRecord {
            name: "Crankshaft sensor issue",
            symptoms: &["stalling", "hard_start", "check_engine_light"],
            drivable: true,
            reason: "May stall but restarts - drive to garage carefully",
            parts: &["Crankshaft position sensor"],
        },
        FaultRecord {
            name: "High fuel consumption",
            symptoms: &["check_engine_light", "poor_mileage"],
            drivable: true,
            reason: "Engine works, just inefficient",
            parts: &[],
        },
    ],
    major: &[
        FaultRecord {
            name: "Severe overheating - Radiator failure",
            symptoms: &["temp_light_red", "steam", "coolant_leak_large", "engine_stopped"],
            drivable: false,
            reason: "Engine stopped due to overheating - will cause damage if driven",
            parts: &["Radiator", "Coolant"],
        },
        FaultRecord {
            name: "Moderate overheating - Thermostat stuck",
            symptoms: &["temp_light_on", "temp_gauge_high", "no_steam", "engine_running"],
            drivable: true,
            reason: "Engine hot but running - can drive SHORT distance to garage with AC off",
            parts: &["Thermostat"],
        },
        FaultRecord {
            name: "Timing belt failure",
            symptoms: &["engine_stopped", "wont_start", "rattling_before_stop"],
            drivable: false,
            reason: "Engine mechanically damaged - cannot run",
            parts: &["Timing belt kit"],
        },
        FaultRecord {
            name: "Head gasket leak",
            symptoms: &["white_smoke", "coolant_in_oil", "engine_running"],
            drivable: true,
            reason: "Engine runs but losing coolant - drive SHORT distance only",
            parts: &["Head gasket"],
        },
        FaultRecord {
            name: "Water pump failure",
            symptoms: &["overheating", "coolant_leak_front", "engine_running"],
            drivable: true,
            reason: "Engine hot but runs - SHORT drive to garage immediately",
            parts: &["Water pump", "Coolant"],
        },
    ],
};

static ELECTRICAL: CategoryEntry = CategoryEntry {
    category: FaultCategory::Electrical,
    keywords: &[
        "battery",
        "start",
        "crank",
        "lights",
        "dead",
        "alternator",
        "charging",
        "dashboard",
        "flickering",
    ],
    minor: &[
        FaultRecord {
            name: "Battery slightly weak",
            symptoms: &["slow_crank", "lights_dim_starting", "engine_starts"],
            drivable: true,
            reason: "Engine starts and runs - battery just weak",
            parts: &[],
        },
        FaultRecord {
            name: "Bulb blown",
            symptoms: &["light_not_working", "engine_fine"],
            drivable: true,
            reason: "Cosmetic issue, car functions normally",
            parts: &["Bulb"],
        },
        FaultRecord {
            name: "Fuse blown",
            symptoms: &["component_not_working", "engine_fine"],
            drivable: true,
            reason: "One system affected, car drives",
            parts: &["Fuse"],
        },
    ],
    moderate: &[
        FaultRecord {
            name: "Alternator weak",
            symptoms: &["battery_light_on", "lights_dim_running", "engine_running"],
            drivable: true,
            reason: "Battery not charging but engine runs - drive to garage before battery dies",
            parts: &["Alternator"],
        },
        FaultRecord {
            name: "Starter motor issue",
            symptoms: &["clicking_sound", "no_crank", "lights_on"],
            drivable: false,
            reason: "Engine won't start - need jump start or new starter",
            parts: &["Starter motor"],
        },
        FaultRecord {
            name: "Ignition coil failure",
            symptoms: &["misfire", "check_engine_light", "engine_running"],
            drivable: true,
            reason: "Engine runs on remaining cylinders",
            parts: &["Ignition coil"],
        },
    ],
    major: &[
        FaultRecord {
            name: "Battery completely dead",
            symptoms: &["no_crank", "no_lights", "no_dashboard"],
            drivable: false,
            reason: "No power, engine cannot start",
            parts: &["Battery"],
        },
        FaultRecord {
            name: "Alternator completely failed",
            symptoms: &["battery_light_on", "engine_dies_while_driving"],
            drivable: false,
            reason: "Battery drained, engine will stop soon",
            parts: &["Alternator", "Battery"],
        },
    ],
};

static BRAKE: CategoryEntry = CategoryEntry {
    category: FaultCategory::Brake,
    keywords: &[
        "brake",
        "braking",
        "squealing",
        "grinding",
        "soft",
        "pedal",
        "stopping",
        "pulling",
    ],
    minor: &[
        FaultRecord {
            name: "Brake pad wear (early stage)",
            symptoms: &["squealing_light", "brake_works", "pedal_normal"],
            drivable: true,
            reason: "Brakes work, just worn pads making noise",
            parts: &["Brake pads"],
        },
        FaultRecord {
            name: "Brake dust buildup",
            symptoms: &["squeaking", "brake_works"],
            drivable: true,
            reason: "Normal braking function",
            parts: &[],
        },
    ],
    moderate: &[
        FaultRecord {
            name: "Brake pad completely worn",
            symptoms: &["grinding_noise", "reduced_braking", "pedal_normal"],
            drivable: true,
            reason: "Brakes still work but metal-on-metal - drive SLOWLY to garage",
            parts: &["Brake pads", "Brake discs"],
        },
        FaultRecord {
            name: "Brake disc warped",
            symptoms: &["vibration_braking", "brake_works"],
            drivable: true,
            reason: "Brakes functional, just vibration",
            parts: &["Brake discs"],
        },
        FaultRecord {
            name: "ABS sensor fault",
            symptoms: &["abs_light_on", "brake_works"],
            drivable: true,
            reason: "Normal brakes work, ABS disabled",
            parts: &["ABS wheel sensor"],
        },
    ],
    major: &[
        FaultRecord {
            name: "Brake fluid leak",
            symptoms: &["soft_pedal", "brake_warning_light", "pedal_spongy"],
            drivable: false,
            reason: "Brake failure imminent - VERY DANGEROUS",
            parts: &["Brake line", "Brake fluid"],
        },
        FaultRecord {
            name: "Master cylinder failure",
            symptoms: &["soft_pedal", "pedal_to_floor", "poor_braking"],
            drivable: false,
            reason: "Brakes barely work - UNSAFE",
            parts: &["Master cylinder"],
        },
        FaultRecord {
            name: "Brake booster failure",
            symptoms: &["hard_pedal", "requires_strong_force"],
            drivable: true,
            reason: "Brakes work but need more force - drive carefully",
            parts: &["Brake booster"],
        },
    ],
};

static TRANSMISSION: CategoryEntry = CategoryEntry {
    category: FaultCategory::Transmission,
    keywords: &[
        "gear",
        "clutch",
        "slipping",
        "grinding",
        "transmission",
        "shift",
        "stuck",
    ],
    minor: &[
        FaultRecord {
            name: "Gear linkage loose",
            symptoms: &["sloppy_shifter", "gears_work"],
            drivable: true,
            reason: "Can still change gears",
            parts: &[],
        },
        FaultRecord {
            name: "Clutch cable adjustment needed",
            symptoms: &["high_biting_point", "clutch_works"],
            drivable: true,
            reason: "Clutch functions, just adjustment needed",
            parts: &[],
        },
    ],
    moderate: &[
        FaultRecord {
            name: "Clutch wearing",
            symptoms: &["slipping_slight", "gear_changes_work"],
            drivable: true,
            reason: "Clutch still engages, just weak - avoid hills",
            parts: &["Clutch kit"],
        },
        FaultRecord {
            name: "Gear grinding (synchro worn)",
            symptoms: &["grinding_changing", "gears_eventually_engage"],
            drivable: true,
            reason: "Can change gears with double-clutching",
            parts: &[],
        },
        FaultRecord {
            name: "Gearbox oil low",
            symptoms: &["difficult_shifting", "grinding_sometimes"],
            drivable: true,
            reason: "Gears work, just stiff shifting",
            parts: &["Gearbox oil"],
        },
    ],
    major: &[
        FaultRecord {
            name: "Clutch completely failed",
            symptoms: &["no_gear_engagement", "engine_revs_no_movement"],
            drivable: false,
            reason: "Power not transmitted to wheels",
            parts: &["Clutch kit"],
        },
        FaultRecord {
            name: "Reverse gear broken",
            symptoms: &["reverse_not_working", "forward_gears_work"],
            drivable: true,
            reason: "Can drive forward - just can't reverse",
            parts: &[],
        },
        FaultRecord {
            name: "Transmission seized",
            symptoms: &["stuck_in_gear", "cannot_shift"],
            drivable: false,
            reason: "Cannot change gears at all",
            parts: &["Gearbox"],
        },
    ],
};

static SUSPENSION: CategoryEntry = CategoryEntry {
    category: FaultCategory::Suspension,
    keywords: &[
        "vibration",
        "clunking",
        "steering",
        "bumps",
        "pulling",
        "shaking",
        "noise_bumps",
    ],
    minor: &[
        FaultRecord {
            name: "Wheel alignment off",
            symptoms: &["pulling_one_side", "car_drives"],
            drivable: true,
            reason: "Car drives, just needs alignment",
            parts: &[],
        },
        FaultRecord {
            name: "Tire pressure low",
            symptoms: &["pulling", "handling_poor"],
            drivable: true,
            reason: "Inflate tires and drive",
            parts: &[],
        },
    ],
    moderate: &[
        FaultRecord {
            name: "Shock absorbers worn",
            symptoms: &["bouncing", "poor_handling", "vibration_bumps"],
            drivable: true,
            reason: "Car drives but uncomfortable - reduce speed",
            parts: &["Shock absorbers"],
        },
        FaultRecord {
            name: "Ball joint worn",
            symptoms: &["clunking_bumps", "steering_loose"],
            drivable: true,
            reason: "Drive carefully to garage - avoid rough roads",
            parts: &["Ball joint"],
        },
        FaultRecord {
            name: "Tie rod worn",
            symptoms: &["steering_vibration", "wandering"],
            drivable: true,
            reason: "Can drive carefully at low speed",
            parts: &["Tie rod end"],
        },
    ],
    major: &[FaultRecord {
        name: "Control arm broken",
        symptoms: &["severe_clunk", "cannot_steer_properly"],
        drivable: false,
        reason: "Steering unsafe - dangerous",
        parts: &["Control arm"],
    }],
};

static AC: CategoryEntry = CategoryEntry {
    category: FaultCategory::Ac,
    keywords: &[
        "ac",
        "air conditioning",
        "cooling",
        "warm",
        "cold",
        "blowing",
        "compressor",
    ],
    minor: &[
        FaultRecord {
            name: "AC gas low",
            symptoms: &["cooling_weak", "blows_slightly_cold"],
            drivable: true,
            reason: "Comfort issue only",
            parts: &["Refrigerant"],
        },
        FaultRecord {
            name: "AC filter clogged",
            symptoms: &["weak_airflow", "some_cooling"],
            drivable: true,
            reason: "AC works, just reduced flow",
            parts: &["Cabin filter"],
        },
        FaultRecord {
            name: "AC belt loose",
            symptoms: &["ac_not_engaging", "squealing"],
            drivable: true,
            reason: "AC doesn't work but car drives fine",
            parts: &["AC belt"],
        },
    ],
    moderate: &[
        FaultRecord {
            name: "AC compressor weak",
            symptoms: &["warm_air", "clicking_sometimes"],
            drivable: true,
            reason: "AC doesn't work, car drives normally",
            parts: &["AC compressor"],
        },
        FaultRecord {
            name: "Condenser leak",
            symptoms: &["no_cooling", "ac_blows_warm"],
            drivable: true,
            reason: "Comfort issue, doesn't affect driving",
            parts: &["Condenser"],
        },
    ],
    major: &[FaultRecord {
        name: "AC compressor seized",
        symptoms: &["loud_grinding", "ac_wont_turn_on"],
        drivable: true,
        reason: "AC dead but car drives - just hot inside",
        parts: &["AC compressor"],
    }],
};

static BODY: CategoryEntry = CategoryEntry {
    category: FaultCategory::Body,
    keywords: &[
        "door", "window", "mirror", "lock", "rust", "lights", "glass", "stuck",
    ],
    minor: &[
        FaultRecord {
            name: "Window stuck",
            symptoms: &["window_not_moving"],
            drivable: true,
            reason: "Doesn't affect driving",
            parts: &["Window regulator"],
        },
        FaultRecord {
            name: "Door lock broken",
            symptoms: &["lock_not_working"],
            drivable: true,
            reason: "Security issue, not driving issue",
            parts: &["Door lock actuator"],
        },
        FaultRecord {
            name: "Mirror broken",
            symptoms: &["mirror_loose"],
            drivable: true,
            reason: "Visibility reduced but can drive",
            parts: &["Side mirror"],
        },
        FaultRecord {
            name: "Tail light out",
            symptoms: &["light_not_working"],
            drivable: true,
            reason: "Drive carefully, get fixed soon",
            parts: &["Bulb"],
        },
    ],
    moderate: &[],
    major: &[],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_by_keyword() {
        assert_eq!(detect_category("My car is overheating"), Some(FaultCategory::Engine));
        assert_eq!(detect_category("Battery is dead"), Some(FaultCategory::Electrical));
        assert_eq!(detect_category("Brakes are squealing"), Some(FaultCategory::Brake));
        assert_eq!(detect_category("Gears won't shift"), Some(FaultCategory::Transmission));
        assert_eq!(detect_category("it makes a weird noise sometimes"), None);
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(detect_category("OVERHEATING badly"), Some(FaultCategory::Engine));
    }

    #[test]
    fn first_category_in_order_wins() {
        // "grinding" appears in both Brake and Transmission keyword lists;
        // Brake is declared first.
        assert_eq!(detect_category("loud grinding"), Some(FaultCategory::Brake));
    }

    #[test]
    fn every_category_has_an_entry() {
        for category in FaultCategory::ALL {
            let e = entry(category);
            assert_eq!(e.category, category);
            assert!(!e.keywords.is_empty());
        }
    }

    #[test]
    fn parse_round_trips_names() {
        for category in FaultCategory::ALL {
            assert_eq!(FaultCategory::parse(category.name()), Some(category));
        }
        assert_eq!(FaultCategory::parse("ac"), Some(FaultCategory::Ac));
        assert_eq!(FaultCategory::parse("Exhaust"), None);
    }
}
