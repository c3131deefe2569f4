//! Aggregation of a chart spec into render-ready series.
//!
//! This is the replacement for the prototype pattern of executing
//! model-generated plotting code: a spec is plain data, validated against
//! the dataset's real columns, and reduced here to labeled sums that any
//! renderer can draw. Nothing in this path interprets model output as code.

use std::collections::BTreeMap;

use serde::Serialize;

use insight_model::{ChartKind, ChartSpec, Column, Dataset};

use crate::error::{ChartError, Result};

/// One aggregated point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// One series; `name` is the grouping value, absent for ungrouped charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesGroup {
    pub name: Option<String>,
    pub points: Vec<SeriesPoint>,
}

/// A validated, aggregated chart ready for a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub kind: ChartKind,
    pub title: String,
    pub x: String,
    pub y: String,
    pub groups: Vec<SeriesGroup>,
}

#[derive(Default)]
struct Accumulator {
    order: Vec<String>,
    sums: BTreeMap<String, f64>,
}

impl Accumulator {
    fn add(&mut self, label: &str, value: f64) {
        match self.sums.get_mut(label) {
            Some(sum) => *sum += value,
            None => {
                self.order.push(label.to_string());
                self.sums.insert(label.to_string(), value);
            }
        }
    }

    fn into_points(self, kind: ChartKind) -> Vec<SeriesPoint> {
        let mut points: Vec<SeriesPoint> = self
            .order
            .iter()
            .map(|label| SeriesPoint {
                label: label.clone(),
                value: self.sums[label],
            })
            .collect();
        match kind {
            // Categories keep upload order.
            ChartKind::Bar => {}
            // Month labels (YYYY-MM) sort chronologically as text.
            ChartKind::Line => points.sort_by(|a, b| a.label.cmp(&b.label)),
            ChartKind::Pie => points.sort_by(|a, b| {
                b.value
                    .partial_cmp(&a.value)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.label.cmp(&b.label))
            }),
        }
        points
    }
}

/// Validates the spec against the dataset and aggregates `y` by `x`
/// (and `group_by` when present), summing values per label.
///
/// Rows with a missing label, group, or value are skipped, mirroring how a
/// group-by aggregation treats nulls.
pub fn build_chart_data(dataset: &Dataset, spec: &ChartSpec) -> Result<ChartData> {
    let x = lookup(dataset, &spec.x)?;
    let y = lookup(dataset, &spec.y)?;
    if !y.is_numeric() {
        return Err(ChartError::NonNumericColumn {
            column: spec.y.clone(),
        });
    }
    let group_column = spec
        .group_by
        .as_deref()
        .map(|name| lookup(dataset, name))
        .transpose()?;

    let mut group_names: Vec<Option<String>> = Vec::new();
    let mut accumulators: Vec<Accumulator> = Vec::new();
    for row in 0..dataset.row_count() {
        let Some(value) = y.values[row].as_number() else {
            continue;
        };
        if x.values[row].is_missing() {
            continue;
        }
        let group = match group_column {
            Some(column) => {
                if column.values[row].is_missing() {
                    continue;
                }
                Some(column.values[row].display())
            }
            None => None,
        };
        let index = match group_names.iter().position(|name| *name == group) {
            Some(index) => index,
            None => {
                group_names.push(group);
                accumulators.push(Accumulator::default());
                group_names.len() - 1
            }
        };
        accumulators[index].add(&x.values[row].display(), value);
    }

    let groups = group_names
        .into_iter()
        .zip(accumulators)
        .map(|(name, accumulator)| SeriesGroup {
            name,
            points: accumulator.into_points(spec.kind),
        })
        .collect();
    tracing::debug!(title = %spec.title, kind = %spec.kind, "chart data built");
    Ok(ChartData {
        kind: spec.kind,
        title: spec.title.clone(),
        x: spec.x.clone(),
        y: spec.y.clone(),
        groups,
    })
}

fn lookup<'a>(dataset: &'a Dataset, name: &str) -> Result<&'a Column> {
    dataset.column(name).ok_or_else(|| ChartError::ColumnNotFound {
        column: name.to_string(),
    })
}
