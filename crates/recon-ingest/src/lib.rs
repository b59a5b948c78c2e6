pub mod csv_table;
pub mod error;

pub use csv_table::{locate_key_columns, read_source_table};
pub use error::{IngestError, Result};
