//! Hand gesture remote: replays hand landmark traces through the gesture engine.

use anyhow::{Context, Result};
use clap::Parser;
use hand_gesture_remote::{
    app::GestureApp,
    config::{Config, EXAMPLE_CONFIG},
    replay::Trace,
};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark trace to replay (YAML), or "-" for stdin
    #[arg(required_unless_present = "write_config")]
    trace: Option<String>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Dispatch sink (log, adb); overrides the config file
    #[arg(short, long)]
    sink: Option<String>,

    /// ADB device serial or host:port
    #[arg(long, env = "ADB_HOST")]
    adb_host: Option<String>,

    /// Write the example configuration to this path and exit
    #[arg(long)]
    write_config: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if let Some(path) = &args.write_config {
        std::fs::write(path, EXAMPLE_CONFIG).with_context(|| format!("Failed to write {path}"))?;
        info!("Example configuration written to {path}");
        return Ok(());
    }

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        Config::load(config_path).with_context(|| format!("Failed to load config file {config_path}"))?
    } else {
        Config::default()
    };

    if let Some(sink) = args.sink {
        config.dispatch.sink = sink;
    }
    if args.adb_host.is_some() {
        config.dispatch.adb_host = args.adb_host;
    }

    let trace = match args.trace.as_deref() {
        Some("-") | None => Trace::from_reader(std::io::stdin().lock()),
        Some(path) => Trace::from_file(path),
    }
    .context("Failed to load landmark trace")?;

    let mut app = GestureApp::new(&config)?;
    let summary = app.run(&trace)?;

    info!(
        "Processed {} frames ({} with a hand), {} gestures, {} dispatch failures",
        summary.frames,
        summary.hand_frames,
        summary.gestures.len(),
        summary.dispatch_failures
    );

    Ok(())
}
