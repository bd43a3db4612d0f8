//! Headless ESCALATION runner.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use escalation_app::cli::Args;
use escalation_app::runner;
use escalation_core::config::DifficultyConfig;
use escalation_sim::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let difficulty = match &args.config {
        Some(path) => DifficultyConfig::load(path)?,
        None => DifficultyConfig::default(),
    };
    info!(?difficulty, "starting session");

    let mut session = Session::with_difficulty(args.session_config(), difficulty);
    let snapshot = runner::run(&mut session, &args.run_options());

    info!(
        ticks = snapshot.time.tick,
        kills = snapshot.kill_count,
        spawn_rate = ?snapshot.spawn_rate,
        "session finished"
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
