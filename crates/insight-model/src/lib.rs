pub mod chart;
pub mod dataset;
pub mod error;
pub mod roles;

pub use chart::{ChartKind, ChartSpec};
pub use dataset::{CellValue, Column, ColumnType, Dataset};
pub use error::{ModelError, Result};
pub use roles::{Role, RoleCandidates, RoleMapping};
