//! Injected inference client seam.
//!
//! The hosted-model transport is not part of this workspace; callers supply
//! an [`InferenceClient`] (one configured instance reused across requests)
//! and tests substitute a stub. Calls are blocking round-trips with no
//! retry: a failure is reported once and handled by the caller's fallback.

use insight_model::{Dataset, RoleCandidates};

use crate::error::{InferError, Result};
use crate::payload::parse_role_candidates;
use crate::prompt::role_inference_prompt;

/// A configured connection to the hosted model.
pub trait InferenceClient {
    /// Sends one prompt and returns the model's raw text response.
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// Client used when inference is turned off; every call fails fast.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledInference;

impl InferenceClient for DisabledInference {
    fn complete(&self, _prompt: &str) -> Result<String> {
        Err(InferError::Disabled)
    }
}

/// Asks the model to propose role candidates for the dataset.
///
/// Composes prompt assembly, the transport round-trip, and strict payload
/// decoding. Every failure mode surfaces as an [`InferError`].
pub fn infer_roles(client: &dyn InferenceClient, dataset: &Dataset) -> Result<RoleCandidates> {
    let prompt = role_inference_prompt(dataset);
    tracing::debug!(chars = prompt.len(), "sending role inference prompt");
    let raw = client.complete(&prompt)?;
    parse_role_candidates(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    use insight_model::{CellValue, Column, ColumnType, Role};

    struct CannedClient(&'static str);

    impl InferenceClient for CannedClient {
        fn complete(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_columns(vec![Column::new(
            "Ingresos",
            ColumnType::Numeric,
            vec![CellValue::Number(1.0)],
        )])
        .unwrap()
    }

    #[test]
    fn round_trips_a_well_formed_response() {
        let client = CannedClient(r#"{"Revenue": "Ingresos"}"#);
        let candidates = infer_roles(&client, &dataset()).unwrap();
        assert_eq!(
            candidates.get(&Role::Revenue).map(String::as_str),
            Some("Ingresos")
        );
    }

    #[test]
    fn surfaces_malformed_responses() {
        let client = CannedClient("I think Revenue is the Ingresos column.");
        let err = infer_roles(&client, &dataset()).unwrap_err();
        assert!(matches!(err, InferError::MalformedPayload { .. }));
    }

    #[test]
    fn disabled_client_fails_fast() {
        let err = infer_roles(&DisabledInference, &dataset()).unwrap_err();
        assert!(matches!(err, InferError::Disabled));
    }
}
