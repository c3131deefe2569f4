pub mod normalize;
pub mod resolver;
pub mod synonyms;

pub use normalize::{normalize_name, normalize_text, similarity};
pub use resolver::{ResolverConfig, RoleResolver, resolve_roles};
pub use synonyms::SynonymTable;
