pub mod csv_output;
pub mod error;

pub use csv_output::{
    COMMENT, QSCAT_FULL, RECON_STATUS, primary_report_headers, secondary_report_headers,
    write_primary_report, write_secondary_report,
};
pub use error::{ReportError, Result};
