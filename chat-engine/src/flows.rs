//! Per-category question scripts.
//!
//! Each question carries an ordered answer map: lowercased substring match
//! against the user's reply, first hit wins, and the matched entry's symptom
//! flag is noted on the session. More specific phrases are listed before
//! their substrings ("slightly cold" before "cold").

use fault_kb::FaultCategory;

/// One scripted question.
#[derive(Debug)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    /// Ordered (answer keyword, symptom flag) pairs.
    pub answer_map: &'static [(&'static str, &'static str)],
}

/// The scripted question sequence for a category.
pub fn question_flow(category: FaultCategory) -> &'static [Question] {
    match category {
        FaultCategory::Engine => ENGINE_FLOW,
        FaultCategory::Electrical => ELECTRICAL_FLOW,
        FaultCategory::Brake => BRAKE_FLOW,
        FaultCategory::Transmission => TRANSMISSION_FLOW,
        FaultCategory::Suspension => SUSPENSION_FLOW,
        FaultCategory::Ac => AC_FLOW,
        FaultCategory::Body => BODY_FLOW,
    }
}

static ENGINE_FLOW: &[Question] = &[
    Question {
        id: "temp_warning",
        text: "Is the temperature warning light ON on your dashboard?",
        answer_map: &[("yes", "temp_warning_on"), ("no", "temp_warning_off")],
    },
    Question {
        id: "engine_running",
        text: "Is the engine still running right now?",
        answer_map: &[
            ("yes", "engine_running"),
            ("stopped", "engine_stopped"),
            ("turned off", "engine_stopped"),
            ("no", "engine_stopped"),
        ],
    },
    Question {
        id: "steam",
        text: "Do you see any steam or smoke coming from the bonnet?",
        answer_map: &[("yes", "steam"), ("no", "no_steam")],
    },
    Question {
        id: "coolant_leak",
        text: "Can you see coolant or water leaking under the car?",
        answer_map: &[
            ("yes", "coolant_leak_large"),
            ("a little", "coolant_leak_small"),
            ("no", "no_leak"),
        ],
    },
    Question {
        id: "check_engine",
        text: "Is the check engine light ON?",
        answer_map: &[("yes", "check_engine_light"), ("no", "no_check_engine")],
    },
    Question {
        id: "shaking",
        text: "Is the engine shaking or vibrating?",
        answer_map: &[("yes", "shaking"), ("no", "no_shaking")],
    },
];

static ELECTRICAL_FLOW: &[Question] = &[
    Question {
        id: "crank",
        text: "When you turn the key, does the engine try to crank (make turning sounds)?",
        answer_map: &[("yes", "engine_cranks"), ("no", "no_crank")],
    },
    Question {
        id: "dashboard_lights",
        text: "Are the dashboard lights turning on?",
        answer_map: &[("yes", "lights_on"), ("no", "no_lights")],
    },
    Question {
        id: "dim_lights",
        text: "Are the headlights or dashboard lights looking dim or weak?",
        answer_map: &[("yes", "lights_dim"), ("no", "lights_normal")],
    },
    Question {
        id: "battery_light",
        text: "Is the battery warning light ON?",
        answer_map: &[("yes", "battery_light_on"), ("no", "battery_light_off")],
    },
];

static BRAKE_FLOW: &[Question] = &[
    Question {
        id: "brake_warning",
        text: "Is the brake warning light ON?",
        answer_map: &[("yes", "brake_warning_light"), ("no", "no_brake_warning")],
    },
    Question {
        id: "pedal_feel",
        text: "How does the brake pedal feel? (Normal / Soft and spongy / Hard)",
        answer_map: &[
            ("soft", "soft_pedal"),
            ("spongy", "soft_pedal"),
            ("normal", "pedal_normal"),
            ("hard", "hard_pedal"),
        ],
    },
    Question {
        id: "brake_noise",
        text: "Do you hear any noise when braking? (Squealing / Grinding / No noise)",
        answer_map: &[
            ("squealing", "squealing_light"),
            ("grinding", "grinding_noise"),
            ("no", "no_noise"),
        ],
    },
    Question {
        id: "brake_works",
        text: "Do the brakes still work (car stops)?",
        answer_map: &[("yes", "brake_works"), ("no", "brake_not_working")],
    },
];

static TRANSMISSION_FLOW: &[Question] = &[
    Question {
        id: "gear_difficulty",
        text: "Is it difficult to change gears?",
        answer_map: &[("yes", "difficult_shifting"), ("no", "shifts_normal")],
    },
    Question {
        id: "grinding",
        text: "Do you hear grinding when changing gears?",
        answer_map: &[("yes", "grinding_changing"), ("no", "no_grinding")],
    },
    Question {
        id: "clutch_engagement",
        text: "Does the engine rev (RPM goes up) but the car doesn't move much?",
        answer_map: &[("yes", "engine_revs_no_movement"), ("no", "movement_normal")],
    },
    Question {
        id: "gears_engage",
        text: "Can you still change gears even if difficult?",
        answer_map: &[("yes", "gears_eventually_engage"), ("no", "no_gear_engagement")],
    },
];

static SUSPENSION_FLOW: &[Question] = &[
    Question {
        id: "vibration",
        text: "Does the steering wheel vibrate while driving?",
        answer_map: &[("yes", "steering_vibration"), ("no", "no_vibration")],
    },
    Question {
        id: "vibration_speed",
        text: "Is the vibration worse at high speeds (above 60 km/h)?",
        answer_map: &[("yes", "high_speed_vibration"), ("no", "low_speed_vibration")],
    },
    Question {
        id: "clunking",
        text: "Do you hear clunking or knocking sounds over bumps?",
        answer_map: &[("yes", "clunking_bumps"), ("no", "no_clunking")],
    },
];

static AC_FLOW: &[Question] = &[
    Question {
        id: "ac_blowing",
        text: "Is the AC blowing air?",
        answer_map: &[("yes", "ac_blowing"), ("no", "ac_not_blowing")],
    },
    Question {
        id: "air_temp",
        text: "Is the air coming out warm or cold?",
        answer_map: &[
            ("slightly cold", "cooling_weak"),
            ("warm", "blows_warm"),
            ("cold", "blows_cold"),
        ],
    },
    Question {
        id: "ac_noise",
        text: "Do you hear any clicking or rattling when AC is ON?",
        answer_map: &[("yes", "clicking_sometimes"), ("no", "no_ac_noise")],
    },
];

static BODY_FLOW: &[Question] = &[Question {
    id: "component",
    text: "Which part has the issue? (Door / Window / Mirror / Lights)",
    answer_map: &[
        ("door", "door_issue"),
        ("window", "window_stuck"),
        ("mirror", "mirror_broken"),
        ("lights", "light_issue"),
    ],
}];

/// Maps a free-text answer to a symptom flag using a question's answer map.
///
/// Lowercased substring scan in declaration order; `None` when the reply
/// matches nothing (the answer is simply ignored, as the script moves on).
pub fn map_answer(question: &Question, answer: &str) -> Option<&'static str> {
    let lower = answer.to_lowercase();
    question
        .answer_map
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, symptom)| *symptom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_flow() {
        for category in FaultCategory::ALL {
            assert!(!question_flow(category).is_empty(), "{category} flow empty");
        }
    }

    #[test]
    fn answer_mapping_is_substring_based() {
        let q = &BRAKE_FLOW[1]; // pedal feel
        assert_eq!(map_answer(q, "It feels soft and spongy"), Some("soft_pedal"));
        assert_eq!(map_answer(q, "Normal"), Some("pedal_normal"));
        assert_eq!(map_answer(q, "dunno"), None);
    }

    #[test]
    fn specific_phrases_win_over_substrings() {
        let q = &AC_FLOW[1];
        assert_eq!(map_answer(q, "slightly cold"), Some("cooling_weak"));
        assert_eq!(map_answer(q, "cold"), Some("blows_cold"));
    }

    #[test]
    fn compound_coolant_answer_records_the_large_leak() {
        let q = &ENGINE_FLOW[3]; // coolant leak
        assert_eq!(map_answer(q, "yes, a little"), Some("coolant_leak_large"));
        assert_eq!(map_answer(q, "just a little"), Some("coolant_leak_small"));
        assert_eq!(map_answer(q, "no"), Some("no_leak"));
    }

    #[test]
    fn engine_stopped_synonyms() {
        let q = &ENGINE_FLOW[1];
        assert_eq!(map_answer(q, "it stopped"), Some("engine_stopped"));
        assert_eq!(map_answer(q, "turned off"), Some("engine_stopped"));
        assert_eq!(map_answer(q, "No"), Some("engine_stopped"));
        assert_eq!(map_answer(q, "Yes"), Some("engine_running"));
    }
}
