use anyhow::Context;

use ledger_cli::{CliConfig, ConsoleInteraction, Session};
use ledger_infra::{AccountRepository, Ledger};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env();
    ledger_observability::tracing::init(&config.log);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let mut ledger = Ledger::new();
    if config.seed_demo_accounts {
        ledger
            .seed_demo_accounts()
            .context("failed to seed demo accounts")?;
    }

    let mut console = ConsoleInteraction::stdio();
    let end = Session::new(&mut ledger, &mut console, config.session)
        .run()
        .context("interactive session failed")?;

    tracing::info!(?end, accounts = ledger.repository().len(), "session finished");
    Ok(())
}
