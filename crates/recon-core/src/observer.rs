//! Progress hooks for the reconciliation passes.

/// The two comparison directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconPass {
    /// One item per primary row.
    PrimaryToSecondary,
    /// One item per distinct secondary key.
    SecondaryToPrimary,
}

impl ReconPass {
    /// Unit of work counted by the pass.
    pub fn unit(self) -> &'static str {
        match self {
            Self::PrimaryToSecondary => "row",
            Self::SecondaryToPrimary => "key",
        }
    }
}

/// Receives progress notifications; all methods default to no-ops.
pub trait ReconObserver {
    fn pass_started(&mut self, _pass: ReconPass, _total: usize) {}

    fn item_done(&mut self, _pass: ReconPass) {}

    fn pass_finished(&mut self, _pass: ReconPass) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ReconObserver for NoopObserver {}
