//! Prompt templates and strict-JSON parsing for model replies.
//!
//! Every prompt instructs the model to answer with a single JSON object.
//! Models still love wrapping that object in Markdown code fences, so every
//! parser first runs [`strip_code_fences`]. Types here are string-typed on
//! purpose; mapping onto the fault catalog happens in the caller.

use serde::Deserialize;

use crate::error_handler::{LlmAssistError, Provider, ProviderError, ProviderErrorKind};

/* ===========================================================================
Category extraction (chat role)
======================================================================== */

/// Model verdict for free-text category extraction.
///
/// `category` is `None` when the model could not map the complaint onto any
/// offered category. `keywords` are the complaint fragments the model based
/// its pick on.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CategoryExtraction {
    pub category: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Builds the category extraction prompt for a user complaint.
///
/// `categories` are the machine names the model must choose from.
pub fn build_category_prompt(message: &str, categories: &[&str]) -> String {
    let list = categories.join(", ");
    format!(
        "You are an assistant for a vehicle diagnostic service.\n\
         A car owner describes a problem. Decide which single fault category it belongs to.\n\
         Allowed categories: {list}.\n\
         Respond with ONLY a JSON object, no prose, in this exact shape:\n\
         {{\"category\": \"<one of the allowed categories, or null if none fit>\", \
         \"keywords\": [\"<short fragments from the complaint that led to your pick>\"]}}\n\
         Complaint: \"{message}\""
    )
}

/// Parses the model reply for a category extraction prompt.
///
/// # Errors
/// [`ProviderErrorKind::Decode`] when the reply is not the expected JSON
/// object (after fence stripping).
pub fn parse_category_reply(raw: &str) -> Result<CategoryExtraction, LlmAssistError> {
    let body = strip_code_fences(raw);
    serde_json::from_str(body).map_err(|e| {
        ProviderError::new(
            Provider::Gemini,
            ProviderErrorKind::Decode(format!("category extraction JSON: {e}")),
        )
        .into()
    })
}

/* ===========================================================================
Dashboard photo analysis (vision role)
======================================================================== */

/// Builds the prompt for the dashboard warning light photo.
///
/// `known_lights` are the display names the reference table recognizes;
/// steering the model towards them keeps its answers matchable.
pub fn build_dashboard_prompt(known_lights: &[&str]) -> String {
    let list = known_lights.join(", ");
    format!(
        "You are looking at a photo of a car dashboard instrument cluster.\n\
         List every warning light that is currently illuminated.\n\
         Prefer these names when they fit: {list}.\n\
         Respond with ONLY a JSON object, no prose, in this exact shape:\n\
         {{\"warning_lights\": [{{\"name\": \"<common light name, e.g. Check Engine>\", \
         \"color\": \"<red|amber|green|blue>\"}}], \"summary\": \"<one sentence>\"}}\n\
         If no lights are lit, return an empty warning_lights array."
    )
}

/// One illuminated light spotted in the photo.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DetectedLight {
    pub name: String,
    #[serde(default)]
    pub color: String,
}

/// Model verdict for a dashboard photo.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DashboardAnalysis {
    #[serde(default)]
    pub warning_lights: Vec<DetectedLight>,
    #[serde(default)]
    pub summary: String,
}

/// Parses the model reply for [`build_dashboard_prompt`].
///
/// # Errors
/// [`ProviderErrorKind::Decode`] on malformed JSON.
pub fn parse_dashboard_reply(raw: &str) -> Result<DashboardAnalysis, LlmAssistError> {
    let body = strip_code_fences(raw);
    serde_json::from_str(body).map_err(|e| {
        ProviderError::new(
            Provider::Gemini,
            ProviderErrorKind::Decode(format!("dashboard analysis JSON: {e}")),
        )
        .into()
    })
}

/* ===========================================================================
Tyre photo assessment (vision role)
======================================================================== */

/// Prompt for the tyre photo condition check.
pub const TYRE_PROMPT: &str = "You are looking at a close-up photo of a single car tyre.\n\
Judge its condition: \"defective\" if you see significant wear, cracks, bulges, \
exposed cords, punctures, or a flat; otherwise \"good\".\n\
Respond with ONLY a JSON object, no prose, in this exact shape:\n\
{\"condition\": \"<good|defective>\", \"reason\": \"<one sentence>\"}";

/// Model verdict for a tyre photo. `condition` is `good` or `defective`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TyreAssessment {
    pub condition: String,
    #[serde(default)]
    pub reason: String,
}

impl TyreAssessment {
    pub fn is_defective(&self) -> bool {
        self.condition.eq_ignore_ascii_case("defective")
    }
}

/// Parses the model reply for [`TYRE_PROMPT`].
///
/// # Errors
/// [`ProviderErrorKind::Decode`] on malformed JSON or an unknown condition
/// value.
pub fn parse_tyre_reply(raw: &str) -> Result<TyreAssessment, LlmAssistError> {
    let body = strip_code_fences(raw);
    let parsed: TyreAssessment = serde_json::from_str(body).map_err(|e| {
        ProviderError::new(
            Provider::Gemini,
            ProviderErrorKind::Decode(format!("tyre assessment JSON: {e}")),
        )
    })?;
    let condition = parsed.condition.to_ascii_lowercase();
    if condition != "good" && condition != "defective" {
        return Err(ProviderError::new(
            Provider::Gemini,
            ProviderErrorKind::Decode(format!("unknown tyre condition `{}`", parsed.condition)),
        )
        .into());
    }
    Ok(parsed)
}

/* ===========================================================================
Fence stripping
======================================================================== */

/// Strips a surrounding Markdown code fence (```json ... ``` or ``` ... ```)
/// and outer whitespace, returning the inner body.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the language tag on the opening fence line, if any.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/* ======================================================================== */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fence() {
        let raw = "```json\n{\"category\": \"engine\"}\n```";
        assert_eq!(strip_code_fences(raw), "{\"category\": \"engine\"}");
    }

    #[test]
    fn strips_bare_fence() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fences("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn parses_category_with_null() {
        let reply = "```json\n{\"category\": null, \"keywords\": []}\n```";
        let out = parse_category_reply(reply).unwrap();
        assert_eq!(out.category, None);
        assert!(out.keywords.is_empty());
    }

    #[test]
    fn parses_category_hit() {
        let reply = "{\"category\": \"brake\", \"keywords\": [\"grinding\", \"pedal\"]}";
        let out = parse_category_reply(reply).unwrap();
        assert_eq!(out.category.as_deref(), Some("brake"));
        assert_eq!(out.keywords, vec!["grinding", "pedal"]);
    }

    #[test]
    fn rejects_non_json_category_reply() {
        assert!(parse_category_reply("the category is engine").is_err());
    }

    #[test]
    fn parses_dashboard_lights() {
        let reply = "```json\n{\"warning_lights\": [{\"name\": \"Check Engine\", \"color\": \"amber\"}, {\"name\": \"Battery\", \"color\": \"red\"}], \"summary\": \"Two lights lit.\"}\n```";
        let out = parse_dashboard_reply(reply).unwrap();
        assert_eq!(out.warning_lights.len(), 2);
        assert_eq!(out.warning_lights[0].name, "Check Engine");
        assert_eq!(out.warning_lights[1].color, "red");
    }

    #[test]
    fn dashboard_empty_lights_is_ok() {
        let out = parse_dashboard_reply("{\"warning_lights\": [], \"summary\": \"All clear.\"}")
            .unwrap();
        assert!(out.warning_lights.is_empty());
    }

    #[test]
    fn parses_tyre_verdict() {
        let out =
            parse_tyre_reply("{\"condition\": \"Defective\", \"reason\": \"Cords exposed.\"}")
                .unwrap();
        assert!(out.is_defective());
    }

    #[test]
    fn rejects_unknown_tyre_condition() {
        assert!(parse_tyre_reply("{\"condition\": \"worn-ish\", \"reason\": \"\"}").is_err());
    }

    #[test]
    fn category_prompt_lists_allowed_categories() {
        let prompt = build_category_prompt("car shakes at idle", &["engine", "brake"]);
        assert!(prompt.contains("engine, brake"));
        assert!(prompt.contains("car shakes at idle"));
    }

    #[test]
    fn dashboard_prompt_names_the_known_lights() {
        let prompt = build_dashboard_prompt(&["Check Engine Light", "Battery Warning"]);
        assert!(prompt.contains("Check Engine Light, Battery Warning"));
        assert!(prompt.contains("warning_lights"));
    }
}
