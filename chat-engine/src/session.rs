//! Conversation state machine.
//!
//! Lifecycle: greet → detect category from the first complaint → walk the
//! scripted question flow, noting a symptom flag per answer → diagnose once
//! enough flags are in (or a critical combination appears early). State is
//! per-session, in memory only, discarded with the session.

use serde::Serialize;
use tracing::{debug, info};

use fault_kb::{FaultCategory, SymptomSet, detect_category};

use crate::diagnosis::Diagnosis;
use crate::flows::{Question, map_answer, question_flow};

/// Symptom combinations that justify an immediate diagnosis, before the
/// usual three-flag minimum is reached.
static CRITICAL_COMBOS: &[&[&str]] = &[
    &["engine_stopped", "steam", "coolant_leak_large"],
    &["soft_pedal", "brake_fluid_leak"],
    &["no_crank", "no_lights"],
    &["no_gear_engagement", "engine_revs_no_movement"],
];

/// Minimum observed flags before a regular diagnosis is attempted.
const MIN_SYMPTOMS_FOR_DIAGNOSIS: usize = 3;

/// Acknowledgement prefixes, rotated by question index from the second
/// question on.
static ACKNOWLEDGEMENTS: &[&str] = &["Got it.", "Okay, thanks.", "Understood.", "Alright."];

/// Conversation stage reported with every reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Greeting,
    Clarification,
    Questioning,
    DiagnosisComplete,
}

/// One reply from the bot.
#[derive(Debug, Clone, Serialize)]
pub struct BotReply {
    pub message: String,
    pub stage: Stage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_category: Option<FaultCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Diagnosis>,
}

/// Who said what, kept for the session transcript.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    pub role: &'static str,
    pub message: String,
}

/// Per-conversation state. Create one per user session, feed it messages,
/// drop it when done.
#[derive(Debug)]
pub struct ChatSession {
    user_name: String,
    category: Option<FaultCategory>,
    /// Index of the next question to ask in the category flow.
    cursor: usize,
    symptoms: SymptomSet,
    transcript: Vec<TranscriptEntry>,
    complete: bool,
}

impl ChatSession {
    /// Starts a conversation and returns the greeting.
    pub fn start(user_name: impl Into<String>) -> (Self, BotReply) {
        let user_name = user_name.into();
        let greeting = format!(
            "Hi {user_name}, I'm here to help. Stay calm - we'll sort this out together.\n\n\
             Can you tell me what's happening with your Suzuki Alto right now?"
        );
        let mut session = Self {
            user_name,
            category: None,
            cursor: 0,
            symptoms: SymptomSet::new(),
            transcript: Vec::new(),
            complete: false,
        };
        session.push_bot(&greeting);
        (
            session,
            BotReply {
                message: greeting,
                stage: Stage::Greeting,
                detected_category: None,
                diagnosis: None,
            },
        )
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn category(&self) -> Option<FaultCategory> {
        self.category
    }

    pub fn symptoms(&self) -> &SymptomSet {
        &self.symptoms
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Notes a symptom flag observed outside the question flow (dashboard
    /// analysis, LLM extraction).
    pub fn note_symptom(&mut self, flag: impl Into<String>) {
        let flag = flag.into();
        debug!(symptom = %flag, "symptom noted");
        self.symptoms.insert(flag);
    }

    /// Sets the category when detection came from elsewhere (LLM fallback).
    /// No-op once a category is locked in.
    pub fn set_category(&mut self, category: FaultCategory) {
        if self.category.is_none() {
            info!(category = %category, "category set externally");
            self.category = Some(category);
        }
    }

    /// Processes one user message and returns the bot's reply.
    pub fn handle_message(&mut self, text: &str) -> BotReply {
        self.transcript.push(TranscriptEntry {
            role: "user",
            message: text.to_string(),
        });

        // First contact: find out what we are even talking about.
        let Some(category) = self.category else {
            return match detect_category(text) {
                Some(found) => {
                    info!(category = %found, "category detected");
                    self.category = Some(found);
                    self.ask_next_question(found)
                }
                None => {
                    let message = "Could you describe the main problem? (For example: car \
                                   won't start, overheating, brakes squealing)"
                        .to_string();
                    self.push_bot(&message);
                    BotReply {
                        message,
                        stage: Stage::Clarification,
                        detected_category: None,
                        diagnosis: None,
                    }
                }
            };
        };

        self.extract_symptom_from_answer(category, text);

        if self.ready_to_diagnose() {
            return self.diagnose(category);
        }
        self.ask_next_question(category)
    }

    /// Produces the diagnosis for the current state. Public so callers can
    /// force a diagnosis (console "diagnose now", dashboard-driven flows).
    pub fn diagnose(&mut self, category: FaultCategory) -> BotReply {
        let (diagnosis, card) = Diagnosis::build(category, &self.symptoms);
        info!(
            category = %category,
            fault = %diagnosis.fault_type,
            drivable = diagnosis.is_safe_to_drive,
            "diagnosis complete"
        );
        self.complete = true;
        self.push_bot(&card);
        BotReply {
            message: card,
            stage: Stage::DiagnosisComplete,
            detected_category: Some(category),
            diagnosis: Some(diagnosis),
        }
    }

    /// Locks in a category found by an external extractor and asks the first
    /// pending question for it. Used when keyword detection missed but an
    /// LLM fallback succeeded.
    pub fn begin_questions(&mut self, category: FaultCategory) -> BotReply {
        self.set_category(category);
        let category = self.category.unwrap_or(category);
        if self.ready_to_diagnose() {
            return self.diagnose(category);
        }
        self.ask_next_question(category)
    }

    /* --------------------- Internals --------------------- */

    fn push_bot(&mut self, message: &str) {
        self.transcript.push(TranscriptEntry {
            role: "bot",
            message: message.to_string(),
        });
    }

    /// Maps the answer to the previously asked question onto a symptom flag.
    /// The first message after detection answers no question and is skipped.
    fn extract_symptom_from_answer(&mut self, category: FaultCategory, answer: &str) {
        if self.cursor == 0 {
            return;
        }
        let flow = question_flow(category);
        let Some(previous) = flow.get(self.cursor - 1) else {
            return;
        };
        if let Some(flag) = map_answer(previous, answer) {
            debug!(question = previous.id, symptom = flag, "symptom extracted");
            self.symptoms.insert(flag.to_string());
        }
    }

    fn ready_to_diagnose(&self) -> bool {
        if self.category.is_none() {
            return false;
        }
        for combo in CRITICAL_COMBOS {
            if combo.iter().all(|s| self.symptoms.contains(*s)) {
                debug!(?combo, "critical combination present");
                return true;
            }
        }
        self.symptoms.len() >= MIN_SYMPTOMS_FOR_DIAGNOSIS
    }

    fn ask_next_question(&mut self, category: FaultCategory) -> BotReply {
        let flow = question_flow(category);
        let message = match flow.get(self.cursor) {
            Some(question) => {
                let text = self.decorate_question(question);
                self.cursor += 1;
                text
            }
            // Flow exhausted without a diagnosis; keep listening.
            None => "Is there anything else you've noticed?".to_string(),
        };
        self.push_bot(&message);
        BotReply {
            message,
            stage: Stage::Questioning,
            detected_category: Some(category),
            diagnosis: None,
        }
    }

    /// Prefixes questions after the first with a rotating acknowledgement.
    fn decorate_question(&self, question: &Question) -> String {
        if self.cursor == 0 {
            question.text.to_string()
        } else {
            let ack = ACKNOWLEDGEMENTS[(self.cursor - 1) % ACKNOWLEDGEMENTS.len()];
            format!("{ack}\n\n{}", question.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fault_kb::Urgency;

    fn drive(session: &mut ChatSession, messages: &[&str]) -> BotReply {
        let mut last = None;
        for m in messages {
            let reply = session.handle_message(m);
            let done = reply.stage == Stage::DiagnosisComplete;
            last = Some(reply);
            if done {
                break;
            }
        }
        last.expect("at least one message")
    }

    #[test]
    fn greeting_mentions_user() {
        let (_, reply) = ChatSession::start("Kavindu");
        assert_eq!(reply.stage, Stage::Greeting);
        assert!(reply.message.contains("Kavindu"));
    }

    #[test]
    fn unknown_complaint_asks_for_clarification() {
        let (mut session, _) = ChatSession::start("there");
        let reply = session.handle_message("something feels wrong");
        assert_eq!(reply.stage, Stage::Clarification);
        assert!(session.category().is_none());
    }

    #[test]
    fn misfire_scenario_is_drivable() {
        let (mut session, _) = ChatSession::start("there");
        // Three mapped answers reach the three-flag minimum and trigger the
        // diagnosis; the engine keeps running, so the car stays drivable.
        let reply = drive(
            &mut session,
            &[
                "My check engine light is on and the car is shaking a bit",
                "No",  // temp warning -> temp_warning_off
                "Yes", // engine running -> engine_running
                "No",  // steam -> no_steam
            ],
        );
        assert_eq!(reply.stage, Stage::DiagnosisComplete);
        let diagnosis = reply.diagnosis.expect("diagnosis");
        assert_eq!(diagnosis.fault_category, FaultCategory::Engine);
        assert!(diagnosis.is_safe_to_drive);
    }

    #[test]
    fn overheating_early_diagnosis_matches_radiator_failure() {
        let (mut session, _) = ChatSession::start("there");
        // An unmapped answer keeps the flag count low until the coolant
        // answer completes the {engine_stopped, steam, coolant_leak_large}
        // combination, which short-circuits the remaining questions.
        let reply = drive(
            &mut session,
            &[
                "My car is overheating",
                "hmm",                 // temp warning -> unmapped
                "it stopped",          // engine running -> engine_stopped
                "Yes",                 // steam -> steam
                "Yes, quite a lot",    // coolant leak -> coolant_leak_large
            ],
        );
        assert_eq!(reply.stage, Stage::DiagnosisComplete);
        let diagnosis = reply.diagnosis.expect("diagnosis");
        // 3 of the 4 radiator symptoms observed (75%) clears the threshold.
        assert_eq!(diagnosis.fault_type, "Severe overheating - Radiator failure");
        assert_eq!(diagnosis.severity, fault_kb::Severity::Major);
    }

    #[test]
    fn clutch_failure_scenario_is_not_drivable() {
        let (mut session, _) = ChatSession::start("there");
        let reply = drive(
            &mut session,
            &[
                "My gears are stuck",
                "Yes",  // difficult to change gears -> difficult_shifting
                "hmm",  // grinding -> unmapped
                "Yes",  // revs but no movement -> engine_revs_no_movement
                "No",   // can't change gears -> no_gear_engagement
            ],
        );
        assert_eq!(reply.stage, Stage::DiagnosisComplete);
        let diagnosis = reply.diagnosis.expect("diagnosis");
        assert_eq!(diagnosis.fault_category, FaultCategory::Transmission);
        assert_eq!(diagnosis.fault_type, "Clutch completely failed");
        assert!(!diagnosis.is_safe_to_drive);
        assert_eq!(diagnosis.urgency, Urgency::Critical);
    }

    #[test]
    fn critical_combo_short_circuits_the_flow() {
        let (mut session, _) = ChatSession::start("there");
        session.handle_message("brake problem");
        session.note_symptom("soft_pedal");
        session.note_symptom("brake_fluid_leak");
        let reply = session.handle_message("the pedal sank to the floor");
        assert_eq!(reply.stage, Stage::DiagnosisComplete);
        assert!(!reply.diagnosis.unwrap().is_safe_to_drive);
    }

    #[test]
    fn flow_exhaustion_keeps_listening() {
        let (mut session, _) = ChatSession::start("there");
        session.handle_message("my door lock is broken"); // Body: one question
        let reply = session.handle_message("hmm"); // unmapped answer
        assert_eq!(reply.stage, Stage::Questioning);
        assert!(reply.message.contains("anything else"));
    }

    #[test]
    fn acknowledgement_appears_from_second_question() {
        let (mut session, _) = ChatSession::start("there");
        let first = session.handle_message("brakes squealing");
        assert!(!first.message.starts_with("Got it."));
        let second = session.handle_message("no");
        assert!(second.message.starts_with("Got it."));
    }

    #[test]
    fn external_category_does_not_override() {
        let (mut session, _) = ChatSession::start("there");
        session.handle_message("engine knocking");
        assert_eq!(session.category(), Some(FaultCategory::Engine));
        session.set_category(FaultCategory::Brake);
        assert_eq!(session.category(), Some(FaultCategory::Engine));
    }
}
