use anyhow::Result;
use skycast::{menu, Dashboard, DashboardConfig};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never interleave with the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = DashboardConfig::load()?;
    let mut dashboard = Dashboard::new(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut dashboard, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
