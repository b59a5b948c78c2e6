use std::io::{self, IsTerminal};

use anyhow::Result;

use recon_cli::pipeline::{RunOverrides, RunResult, load_config, run_reconciliation};
use recon_cli::progress::ProgressObserver;
use recon_cli::summary::category_table;
use recon_model::RunConfig;

use crate::cli::{CategoriesArgs, RunArgs};

pub fn run_recon(config: &RunConfig, args: &RunArgs) -> Result<RunResult> {
    let show_progress = !args.no_progress && io::stderr().is_terminal();
    let mut observer = ProgressObserver::new(config.labels.clone(), show_progress);
    run_reconciliation(config, &mut observer)
}

pub fn run_categories(args: &CategoriesArgs) -> Result<()> {
    let config = load_config(&RunOverrides {
        config: args.config.clone(),
        ..RunOverrides::default()
    })?;
    println!("{}", category_table(&config.category_map));
    Ok(())
}
