//! Terminal progress bars for the reconciliation passes.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use recon_core::{ReconObserver, ReconPass};
use recon_model::SourceLabels;

const BAR_TEMPLATE: &str = "{msg:<16} {wide_bar:.cyan/blue} {pos}/{len} {prefix}";

/// Draws one bar per pass on stderr; draws nothing when disabled.
pub struct ProgressObserver {
    labels: SourceLabels,
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl ProgressObserver {
    pub fn new(labels: SourceLabels, enabled: bool) -> Self {
        Self {
            labels,
            enabled,
            bar: None,
        }
    }

    fn message(&self, pass: ReconPass) -> String {
        match pass {
            ReconPass::PrimaryToSecondary => {
                format!("{} -> {}", self.labels.primary, self.labels.secondary)
            }
            ReconPass::SecondaryToPrimary => {
                format!("{} -> {}", self.labels.secondary, self.labels.primary)
            }
        }
    }
}

impl ReconObserver for ProgressObserver {
    fn pass_started(&mut self, pass: ReconPass, total: usize) {
        if !self.enabled {
            return;
        }
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        bar.set_style(
            ProgressStyle::with_template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message(self.message(pass));
        bar.set_prefix(format!("{}s", pass.unit()));
        self.bar = Some(bar);
    }

    fn item_done(&mut self, _pass: ReconPass) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn pass_finished(&mut self, _pass: ReconPass) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}
