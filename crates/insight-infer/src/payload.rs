//! Strict decoding of untrusted inference payloads.
//!
//! The payload arrives as free text from a hosted model. It is decoded with
//! `serde_json` against a fixed schema and nothing else: any deviation is a
//! [`InferError::MalformedPayload`], and the text is never evaluated as
//! code. The single tolerance is stripping a surrounding markdown code
//! fence, which models add routinely.

use serde_json::Value;

use insight_model::{ChartSpec, Role, RoleCandidates};

use crate::error::{InferError, Result};

/// Decodes a role-proposal payload.
///
/// Expects a JSON object whose keys are role names (case-insensitive) and
/// whose values are proposed column names. Unknown keys and non-string or
/// blank values are ignored; a payload that is not a JSON object at all is
/// rejected.
pub fn parse_role_candidates(raw: &str) -> Result<RoleCandidates> {
    let value: Value =
        serde_json::from_str(strip_code_fence(raw)).map_err(|e| InferError::MalformedPayload {
            reason: e.to_string(),
        })?;
    let Value::Object(object) = value else {
        return Err(InferError::MalformedPayload {
            reason: "payload is not a JSON object".to_string(),
        });
    };
    let mut candidates = RoleCandidates::new();
    for (key, value) in object {
        let Some(role) = Role::parse(&key) else {
            tracing::debug!(key = %key, "ignoring unknown role key");
            continue;
        };
        if let Value::String(proposed) = value
            && !proposed.trim().is_empty()
        {
            candidates.insert(role, proposed.trim().to_string());
        }
    }
    Ok(candidates)
}

/// Decodes a chart-instruction payload into structured specs.
pub fn parse_chart_specs(raw: &str) -> Result<Vec<ChartSpec>> {
    serde_json::from_str(strip_code_fence(raw)).map_err(|e| InferError::MalformedPayload {
        reason: e.to_string(),
    })
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // The info string ("json") runs to the first newline.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.strip_suffix("```").unwrap_or(body).trim()
}
