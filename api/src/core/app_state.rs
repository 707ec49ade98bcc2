use std::collections::HashMap;

use chat_engine::ChatSession;
use llm_assist::LlmServiceProfiles;
use ml_serving::{PartPricePredictor, RepairTimePredictor};
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

/// Shared state for all HTTP handlers.
///
/// The LLM profiles and the regression artifacts are each optional: the
/// scripted diagnosis keeps working without them, the routes that need a
/// missing piece degrade per request instead of failing startup.
pub struct AppState {
    /// Live chat sessions keyed by the id handed out at `/chat/start`.
    pub sessions: RwLock<HashMap<Uuid, ChatSession>>,
    /// Chat + vision LLM backends, when configured.
    pub llm: Option<LlmServiceProfiles>,
    /// Repair duration regression, when its artifact is present.
    pub repair_time: Option<RepairTimePredictor>,
    /// Part price regression, when its artifact is present.
    pub part_price: Option<PartPricePredictor>,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// Failures in the optional pieces are logged and leave the slot empty.
    pub fn from_env() -> Self {
        let llm = match LlmServiceProfiles::from_env() {
            Ok(profiles) => Some(profiles),
            Err(e) => {
                warn!(error = %e, "LLM backends unavailable, running scripted-only");
                None
            }
        };

        let repair_time = match RepairTimePredictor::from_env() {
            Ok(p) => Some(p),
            Err(e) => {
                warn!(error = %e, "repair time artifact unavailable");
                None
            }
        };

        let part_price = match PartPricePredictor::from_env() {
            Ok(p) => Some(p),
            Err(e) => {
                warn!(error = %e, "part price artifact unavailable");
                None
            }
        };

        info!(
            llm = llm.is_some(),
            repair_time = repair_time.is_some(),
            part_price = part_price.is_some(),
            "application state ready"
        );

        Self {
            sessions: RwLock::new(HashMap::new()),
            llm,
            repair_time,
            part_price,
        }
    }
}
