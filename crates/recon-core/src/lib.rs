//! Normalization, key indexing and two-way reconciliation of questionnaire
//! records.

pub mod category;
pub mod index;
pub mod normalize;
pub mod observer;
pub mod reconcile;

pub use category::{CategoryMapper, UnmappedCodes};
pub use index::{SecondaryRecords, build_index, prepare_primary, prepare_secondary};
pub use normalize::{normalize, normalize_identifier};
pub use observer::{NoopObserver, ReconObserver, ReconPass};
pub use reconcile::{Reconciliation, reconcile, reconcile_primary, reconcile_secondary};
