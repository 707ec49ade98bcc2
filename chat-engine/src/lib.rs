//! Scripted diagnostic conversation engine.
//!
//! A [`ChatSession`] walks the owner through a fixed per-category question
//! sequence, accumulates symptom flags from the answers, and hands the flag
//! set to `fault-kb` for the final diagnosis. There is no NLU here: category
//! detection and answer interpretation are keyword/substring lookups, which
//! is exactly as smart as the question script needs.

pub mod diagnosis;
pub mod flows;
pub mod session;

pub use diagnosis::Diagnosis;
pub use flows::{Question, question_flow};
pub use session::{BotReply, ChatSession, Stage};
