//! Static multilingual synonym table.
//!
//! Ordered header variants per role, used by the local fuzzy fallback when
//! remote inference is unavailable or proposes nothing usable. Order
//! matters: earlier variants are the stronger signals and win first.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use insight_model::Role;

const REVENUE_SYNONYMS: [&str; 8] = [
    "Revenue", "Sales", "Total", "Income", "Ingresos", "Amount", "Ventas", "Umsatz",
];
const PRODUCT_SYNONYMS: [&str; 6] = [
    "Product",
    "Item",
    "Producto",
    "Product_Name",
    "Artikel",
    "Articulo",
];
const REGION_SYNONYMS: [&str; 6] = ["Region", "Area", "Territory", "Zone", "Región", "Zona"];
// Date-bearing headers are listed here too so an underived month column can
// still resolve the role.
const MONTH_SYNONYMS: [&str; 7] = [
    "Month", "Mes", "Periodo", "Period", "Monat", "Date", "Fecha",
];

/// Role-to-variants mapping, immutable once built.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    entries: BTreeMap<Role, Vec<String>>,
}

impl SynonymTable {
    /// The process-wide builtin table, built once on first use.
    pub fn builtin() -> &'static SynonymTable {
        static TABLE: OnceLock<SynonymTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            SynonymTable::from_entries([
                (Role::Revenue, REVENUE_SYNONYMS.as_slice()),
                (Role::Product, PRODUCT_SYNONYMS.as_slice()),
                (Role::Region, REGION_SYNONYMS.as_slice()),
                (Role::Month, MONTH_SYNONYMS.as_slice()),
            ])
        })
    }

    /// Builds a custom table, e.g. for domain-specific deployments.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (Role, &'a [&'a str])>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(role, synonyms)| {
                (
                    role,
                    synonyms.iter().map(|s| (*s).to_string()).collect::<Vec<_>>(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Ordered variants for a role; empty when the role has none.
    pub fn for_role(&self, role: Role) -> &[String] {
        self.entries.get(&role).map_or(&[], Vec::as_slice)
    }
}
