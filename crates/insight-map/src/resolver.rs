//! Role resolution engine.
//!
//! Resolution runs two cooperating strategies per role: a proposal from the
//! injected inference capability (untrusted, may fail or hallucinate) and a
//! local fuzzy scan over the synonym table. Inference failures degrade to
//! the local path; a role that neither path resolves stays absent. The
//! resolver never fails for resolution reasons.

use insight_model::{Column, Dataset, Role, RoleCandidates, RoleMapping};

use crate::normalize::normalize_name;
use crate::synonyms::SynonymTable;

/// Similarity cutoffs for the resolver.
///
/// Revenue uses a stricter cutoff than the general roles: a spurious
/// revenue match poisons every aggregation downstream, while the general
/// roles must stay loose enough to absorb header variants across languages.
#[derive(Debug, Clone, Copy)]
pub struct ResolverConfig {
    /// Minimum similarity for accepting an inference proposal (default: 0.85).
    pub proposal_cutoff: f64,
    /// Minimum similarity for a synonym match on general roles (default: 0.80).
    pub synonym_cutoff: f64,
    /// Minimum similarity for a synonym match on Revenue (default: 0.88).
    pub revenue_cutoff: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            proposal_cutoff: 0.85,
            synonym_cutoff: 0.80,
            revenue_cutoff: 0.88,
        }
    }
}

impl ResolverConfig {
    /// Tighter cutoffs for high-stakes reporting.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            proposal_cutoff: 0.92,
            synonym_cutoff: 0.88,
            revenue_cutoff: 0.94,
        }
    }

    /// Looser cutoffs for exploratory analysis of messy uploads.
    #[must_use]
    pub fn relaxed() -> Self {
        Self {
            proposal_cutoff: 0.78,
            synonym_cutoff: 0.72,
            revenue_cutoff: 0.82,
        }
    }

    fn synonym_cutoff_for(&self, role: Role) -> f64 {
        if role == Role::Revenue {
            self.revenue_cutoff
        } else {
            self.synonym_cutoff
        }
    }
}

/// Engine mapping dataset columns onto the fixed semantic roles.
pub struct RoleResolver<'a> {
    synonyms: &'a SynonymTable,
    config: ResolverConfig,
}

impl<'a> RoleResolver<'a> {
    pub fn new(synonyms: &'a SynonymTable, config: ResolverConfig) -> Self {
        Self { synonyms, config }
    }

    /// Resolves every role for the dataset.
    ///
    /// `infer` is the injected external capability. Any error it returns is
    /// recovered as an empty candidate set and never propagated; malformed
    /// proposals are filtered by the name normalizer and the numeric check.
    pub fn resolve<F>(&self, dataset: &Dataset, infer: F) -> RoleMapping
    where
        F: FnOnce(&Dataset) -> anyhow::Result<RoleCandidates>,
    {
        let candidates = match infer(dataset) {
            Ok(candidates) => candidates,
            Err(error) => {
                tracing::warn!(%error, "inference unavailable, using local fallback only");
                RoleCandidates::new()
            }
        };
        let headers = dataset.headers();
        let mut mapping = RoleMapping::new();
        for role in Role::ALL {
            match self.resolve_role(role, &candidates, dataset, &headers) {
                Some(column) => {
                    tracing::debug!(%role, column = %column, "role resolved");
                    mapping.assign(role, column);
                }
                None => tracing::debug!(%role, "role unresolved"),
            }
        }
        mapping
    }

    fn resolve_role(
        &self,
        role: Role,
        candidates: &RoleCandidates,
        dataset: &Dataset,
        headers: &[&str],
    ) -> Option<String> {
        if let Some(proposed) = candidates.get(&role)
            && let Some(column) = normalize_name(proposed, headers, self.config.proposal_cutoff)
            && self.accepts(role, dataset, &column)
        {
            return Some(column);
        }
        // Local fallback: first synonym with an acceptable match wins.
        for synonym in self.synonyms.for_role(role) {
            if let Some(column) =
                normalize_name(synonym, headers, self.config.synonym_cutoff_for(role))
                && self.accepts(role, dataset, &column)
            {
                return Some(column);
            }
        }
        None
    }

    /// Revenue must resolve to a numeric column; other roles take any.
    fn accepts(&self, role: Role, dataset: &Dataset, column: &str) -> bool {
        role != Role::Revenue || dataset.column(column).is_some_and(Column::is_numeric)
    }
}

/// Resolves roles with the builtin synonym table and default cutoffs.
pub fn resolve_roles<F>(dataset: &Dataset, infer: F) -> RoleMapping
where
    F: FnOnce(&Dataset) -> anyhow::Result<RoleCandidates>,
{
    RoleResolver::new(SynonymTable::builtin(), ResolverConfig::default()).resolve(dataset, infer)
}
