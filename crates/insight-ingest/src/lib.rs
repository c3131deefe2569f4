pub mod encoding;
pub mod error;
pub mod excel;
pub mod loader;

pub use encoding::{decode_text, detect_encoding};
pub use error::{IngestError, Result};
pub use excel::read_workbook;
pub use loader::{FileFormat, MONTH_COLUMN, load_dataset, load_dataset_from_path, sniff_format};
