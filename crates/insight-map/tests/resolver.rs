use anyhow::anyhow;

use insight_map::{ResolverConfig, RoleResolver, SynonymTable, resolve_roles};
use insight_model::{CellValue, Column, ColumnType, Dataset, Role, RoleCandidates};

fn numbers(values: &[f64]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::Number(*v)).collect()
}

fn texts(values: &[&str]) -> Vec<CellValue> {
    values
        .iter()
        .map(|v| CellValue::Text((*v).to_string()))
        .collect()
}

fn no_inference(_: &Dataset) -> anyhow::Result<RoleCandidates> {
    Err(anyhow!("inference disabled"))
}

#[test]
fn spanish_dataset_resolves_locally_after_loading() {
    let dataset = insight_ingest::load_dataset(
        "Fecha,Producto,Ingresos,Región\n\
         2024-01-15,Widget,100,Norte\n\
         2024-02-20,Gadget,150,Sur\n"
            .as_bytes(),
        "ventas.csv",
    )
    .unwrap();

    let mapping = resolve_roles(&dataset, no_inference);

    assert_eq!(mapping.column_for(Role::Revenue), Some("Ingresos"));
    assert_eq!(mapping.column_for(Role::Product), Some("Producto"));
    assert_eq!(mapping.column_for(Role::Region), Some("Región"));
    assert_eq!(mapping.column_for(Role::Month), Some("Month"));
}

#[test]
fn failing_inference_never_escapes() {
    let dataset = Dataset::from_columns(vec![
        Column::new("Sales", ColumnType::Numeric, numbers(&[10.0, 20.0])),
        Column::new("Item", ColumnType::Text, texts(&["a", "b"])),
    ])
    .unwrap();

    let mapping = resolve_roles(&dataset, |_| Err(anyhow!("connection reset")));

    assert_eq!(mapping.column_for(Role::Revenue), Some("Sales"));
    assert_eq!(mapping.column_for(Role::Product), Some("Item"));
    assert_eq!(mapping.column_for(Role::Region), None);
}

#[test]
fn accepted_proposal_wins_over_synonyms() {
    let dataset = Dataset::from_columns(vec![
        Column::new("Ingresos", ColumnType::Numeric, numbers(&[1.0])),
        Column::new("Total", ColumnType::Numeric, numbers(&[2.0])),
    ])
    .unwrap();

    let mapping = resolve_roles(&dataset, |_| {
        let mut candidates = RoleCandidates::new();
        // Sloppy casing and padding still reconcile to the real header.
        candidates.insert(Role::Revenue, " ingresos ".to_string());
        Ok(candidates)
    });

    // The synonym scan alone would have picked "Total" (earlier variant).
    assert_eq!(mapping.column_for(Role::Revenue), Some("Ingresos"));
}

#[test]
fn hallucinated_proposal_falls_back_to_synonyms() {
    let dataset = Dataset::from_columns(vec![
        Column::new("Producto", ColumnType::Text, texts(&["a"])),
        Column::new("Ingresos", ColumnType::Numeric, numbers(&[5.0])),
    ])
    .unwrap();

    let mapping = resolve_roles(&dataset, |_| {
        let mut candidates = RoleCandidates::new();
        candidates.insert(Role::Revenue, "Quarterly Run Rate".to_string());
        Ok(candidates)
    });

    assert_eq!(mapping.column_for(Role::Revenue), Some("Ingresos"));
}

#[test]
fn non_numeric_revenue_synonym_is_skipped() {
    // "Revenue" is the first synonym but holds text; "Total" is numeric.
    let dataset = Dataset::from_columns(vec![
        Column::new("Revenue", ColumnType::Text, texts(&["high", "low"])),
        Column::new("Total", ColumnType::Numeric, numbers(&[10.0, 20.0])),
    ])
    .unwrap();

    let mapping = resolve_roles(&dataset, no_inference);

    assert_eq!(mapping.column_for(Role::Revenue), Some("Total"));
}

#[test]
fn revenue_stays_absent_without_a_numeric_candidate() {
    let dataset = Dataset::from_columns(vec![
        Column::new("Revenue", ColumnType::Text, texts(&["high"])),
        Column::new("Region", ColumnType::Text, texts(&["north"])),
    ])
    .unwrap();

    let mapping = resolve_roles(&dataset, |_| {
        let mut candidates = RoleCandidates::new();
        candidates.insert(Role::Revenue, "Revenue".to_string());
        Ok(candidates)
    });

    assert_eq!(mapping.column_for(Role::Revenue), None);
    assert_eq!(mapping.column_for(Role::Region), Some("Region"));
}

#[test]
fn unrelated_headers_leave_all_roles_absent() {
    let dataset = Dataset::from_columns(vec![
        Column::new("Latitude", ColumnType::Numeric, numbers(&[1.0])),
        Column::new("Longitude", ColumnType::Numeric, numbers(&[2.0])),
    ])
    .unwrap();

    let mapping = resolve_roles(&dataset, no_inference);

    assert_eq!(mapping.resolved_count(), 0);
}

#[test]
fn custom_table_and_config_are_honored() {
    let table = SynonymTable::from_entries([(Role::Revenue, ["Turnover"].as_slice())]);
    let dataset = Dataset::from_columns(vec![Column::new(
        "Turnover",
        ColumnType::Numeric,
        numbers(&[3.0]),
    )])
    .unwrap();

    let resolver = RoleResolver::new(&table, ResolverConfig::strict());
    let mapping = resolver.resolve(&dataset, no_inference);

    assert_eq!(mapping.column_for(Role::Revenue), Some("Turnover"));
    assert_eq!(mapping.column_for(Role::Product), None);
}
