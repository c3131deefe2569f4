pub mod client;
pub mod error;
pub mod payload;
pub mod prompt;

pub use client::{DisabledInference, InferenceClient, infer_roles};
pub use error::{InferError, Result};
pub use payload::{parse_chart_specs, parse_role_candidates};
pub use prompt::{DEFAULT_SAMPLE_ROWS, role_inference_prompt, sample_markdown, summary_prompt};
