//! Library components for the `qs-recon` command.

pub mod logging;
pub mod pipeline;
pub mod progress;
pub mod summary;
