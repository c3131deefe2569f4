//! Semantic roles and role mappings.
//!
//! Downstream analysis needs to locate four fixed semantic categories inside
//! an arbitrary uploaded table. A [`RoleMapping`] records, per [`Role`],
//! which column (if any) was resolved for the current dataset.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four fixed semantic categories.
///
/// Declaration order is the fixed resolution order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Role {
    Revenue,
    Product,
    Region,
    Month,
}

impl Role {
    /// All roles, in resolution order.
    pub const ALL: [Role; 4] = [Role::Revenue, Role::Product, Role::Region, Role::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Product => "Product",
            Self::Region => "Region",
            Self::Month => "Month",
        }
    }

    /// Case-insensitive parse of a role name.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Untrusted role proposals decoded from an inference payload.
///
/// Values are free text and are not guaranteed to name real columns.
pub type RoleCandidates = BTreeMap<Role, String>;

/// Resolved role-to-column association for one dataset.
///
/// Every present value names a column of the dataset it was resolved
/// against. An absent role means "undetermined" and is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMapping {
    entries: BTreeMap<Role, String>,
}

impl RoleMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, role: Role, column: impl Into<String>) {
        self.entries.insert(role, column.into());
    }

    /// The resolved column for a role, if any.
    pub fn column_for(&self, role: Role) -> Option<&str> {
        self.entries.get(&role).map(String::as_str)
    }

    pub fn is_resolved(&self, role: Role) -> bool {
        self.entries.contains_key(&role)
    }

    pub fn resolved_count(&self) -> usize {
        self.entries.len()
    }

    /// Every role with its resolution status, in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Option<&str>)> {
        Role::ALL
            .into_iter()
            .map(move |role| (role, self.column_for(role)))
    }
}
