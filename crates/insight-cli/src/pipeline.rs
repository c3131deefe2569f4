//! Analysis pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: sniff, decode and clean the uploaded file
//! 2. **Resolve**: map columns onto semantic roles (proposal file or local)
//! 3. **Chart**: aggregate the default chart set for the resolved roles
//! 4. **Report**: assemble the markdown report when a report dir is given
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. Chart artifacts are staged in a scoped temporary store and only
//! copied out when a report directory was requested, so nothing leaks on
//! early exits.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info_span, warn};

use insight_charts::{ChartData, build_chart_data, default_charts};
use insight_infer::{
    DisabledInference, InferenceClient, infer_roles, role_inference_prompt, summary_prompt,
};
use insight_ingest::load_dataset_from_path;
use insight_map::{ResolverConfig, RoleResolver, SynonymTable};
use insight_model::{Dataset, RoleMapping};
use insight_report::{ArtifactStore, MISSING_SUMMARY_PLACEHOLDER, ReportDocument, load_summary};

use crate::cli::AnalyzeArgs;

/// Inference client backed by a proposal file on disk.
///
/// The file contents go through exactly the same strict decoding as a
/// remote response would, so a hand-written or cached proposal exercises
/// the full untrusted-payload path.
pub struct FileInference {
    path: PathBuf,
}

impl FileInference {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl InferenceClient for FileInference {
    fn complete(&self, _prompt: &str) -> insight_infer::Result<String> {
        std::fs::read_to_string(&self.path).map_err(|e| insight_infer::InferError::Transport {
            message: format!("{}: {e}", self.path.display()),
        })
    }
}

/// Result of a full analysis run.
#[derive(Debug)]
pub struct AnalyzeResult {
    pub dataset: Dataset,
    pub mapping: RoleMapping,
    pub charts: Vec<ChartData>,
    pub report_path: Option<PathBuf>,
    /// Role-inference prompt, present with `--show-prompt`.
    pub prompt: Option<String>,
    /// Summary prompt for the user's question, present when one was given.
    pub summary_prompt: Option<String>,
}

/// Runs the staged pipeline for one file.
pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let span = info_span!("analyze", file = %args.file.display());
    let _guard = span.enter();
    let config = resolver_config(args);

    // Stage 1: load
    let dataset = load_dataset_from_path(&args.file).context("load dataset")?;

    // Stage 2: resolve
    let resolver = RoleResolver::new(SynonymTable::builtin(), config);
    let mapping = match &args.proposal {
        Some(path) => {
            let client = FileInference::new(path.clone());
            resolver.resolve(&dataset, |ds| {
                infer_roles(&client, ds).map_err(Into::into)
            })
        }
        None => resolver.resolve(&dataset, |ds| {
            infer_roles(&DisabledInference, ds).map_err(Into::into)
        }),
    };

    // Stage 3: chart
    let mut charts = Vec::new();
    for spec in default_charts(&mapping) {
        match build_chart_data(&dataset, &spec) {
            Ok(data) => charts.push(data),
            Err(error) => warn!(%error, title = %spec.title, "skipping chart"),
        }
    }

    // Stage 4: report
    let report_path = match &args.report_dir {
        Some(dir) => Some(write_report(args, dir, &charts)?),
        None => None,
    };

    let prompt = args.show_prompt.then(|| role_inference_prompt(&dataset));
    let summary = args
        .question
        .as_deref()
        .map(|question| summary_prompt(question, &dataset));
    Ok(AnalyzeResult {
        dataset,
        mapping,
        charts,
        report_path,
        prompt,
        summary_prompt: summary,
    })
}

fn resolver_config(args: &AnalyzeArgs) -> ResolverConfig {
    if args.strict {
        ResolverConfig::strict()
    } else if args.relaxed {
        ResolverConfig::relaxed()
    } else {
        ResolverConfig::default()
    }
}

/// Stages chart data through the scoped artifact store, then copies the
/// kept artifacts into the report directory and writes `report.md`.
fn write_report(
    args: &AnalyzeArgs,
    dir: &std::path::Path,
    charts: &[ChartData],
) -> Result<PathBuf> {
    let store = ArtifactStore::new().context("create artifact store")?;
    let summary = match &args.summary_file {
        Some(path) => load_summary(path).context("load summary")?,
        None => MISSING_SUMMARY_PLACEHOLDER.to_string(),
    };

    let mut report = ReportDocument::new("Business Intelligence Summary", summary);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create report dir {}", dir.display()))?;
    for (index, chart) in charts.iter().enumerate() {
        let name = format!("chart_{}.json", index + 1);
        let json = serde_json::to_vec_pretty(chart).context("serialize chart data")?;
        let staged = store
            .write(&name, &json)
            .with_context(|| format!("stage artifact {name}"))?;
        let kept = dir.join(&name);
        std::fs::copy(&staged, &kept)
            .with_context(|| format!("keep artifact {}", kept.display()))?;
        report.push_figure(kept, chart.title.clone());
    }
    let path = report.write_markdown(dir).context("write report")?;
    Ok(path)
    // `store` drops here and the staged temporaries are cleaned up.
}
