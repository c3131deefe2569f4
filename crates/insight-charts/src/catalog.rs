//! Canonical chart set derived from a role mapping.

use insight_model::{ChartKind, ChartSpec, Role, RoleMapping};

/// The default visualization trio: revenue per product, monthly revenue
/// trend, revenue share by region.
///
/// Every chart needs Revenue; each of the others is emitted only when its
/// role resolved. An absent role skips its chart, it never fails.
pub fn default_charts(mapping: &RoleMapping) -> Vec<ChartSpec> {
    let Some(revenue) = mapping.column_for(Role::Revenue) else {
        tracing::debug!("revenue unresolved, no default charts");
        return Vec::new();
    };
    let mut specs = Vec::new();
    if let Some(product) = mapping.column_for(Role::Product) {
        specs.push(ChartSpec::new(
            ChartKind::Bar,
            product,
            revenue,
            "Total Revenue per Product",
        ));
    }
    if let Some(month) = mapping.column_for(Role::Month) {
        specs.push(ChartSpec::new(
            ChartKind::Line,
            month,
            revenue,
            "Monthly Revenue Trend",
        ));
    }
    if let Some(region) = mapping.column_for(Role::Region) {
        specs.push(ChartSpec::new(
            ChartKind::Pie,
            region,
            revenue,
            "Revenue by Region",
        ));
    }
    specs
}
