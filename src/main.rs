use clap::Parser;
use handcue_core::CommandTable;
use handcue_cv::{
    overlay::guide_lines, source::scripted::parse_script, GestureConfig, JsonLinesSource,
    LogKeySink, ScriptedSource,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod controller;

use controller::{Controller, RunSummary};

#[derive(Parser, Debug)]
#[command(name = "handcue", version, about = "Control browser video playback with hand gestures")]
struct Cli {
    /// JSON-lines landmark stream, `-` for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Drive the pipeline from the built-in scripted hand instead of a stream
    #[arg(long)]
    demo: bool,

    /// Custom scripted sequence, e.g. "open:20,closed,swipe-left"
    #[arg(long, conflicts_with = "demo")]
    script: Option<String>,

    /// Seed for the scripted hand's jitter
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Flip incoming landmarks horizontally
    #[arg(long)]
    mirror: bool,

    #[arg(long)]
    max_frames: Option<u64>,

    /// Write an overlay PNG for every dispatched gesture
    #[arg(long)]
    overlay_dir: Option<PathBuf>,

    /// Print the effective config and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    summary_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("handcue=info,handcue_cv=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => GestureConfig::from_file(path)?,
        None => GestureConfig::default(),
    };

    if cli.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    for line in guide_lines(&CommandTable::standard()) {
        info!("{}", line);
    }

    let mut controller = Controller::new(config.clone(), LogKeySink);
    if let Some(dir) = &cli.overlay_dir {
        controller = controller.with_overlay_dir(dir)?;
    }

    let summary = if cli.demo || cli.script.is_some() {
        let steps = match &cli.script {
            Some(text) => parse_script(text)?,
            None => ScriptedSource::demo_script(),
        };
        let seed = cli.seed.unwrap_or_else(rand::random);
        let mut source = ScriptedSource::new(steps, seed);
        info!("Scripted hand: {} frames, seed {}", source.total_frames(), seed);
        controller.run(&mut source, cli.max_frames)?
    } else if cli.input == "-" {
        info!("Reading landmarks from stdin");
        let stdin = std::io::stdin();
        let mut source = JsonLinesSource::new(stdin.lock(), config.min_detection_confidence)
            .with_mirror(cli.mirror);
        let summary = controller.run(&mut source, cli.max_frames)?;
        report_skipped(source.skipped());
        summary
    } else {
        info!("Reading landmarks from {}", cli.input);
        let mut source = JsonLinesSource::open(&cli.input, config.min_detection_confidence)?
            .with_mirror(cli.mirror);
        let summary = controller.run(&mut source, cli.max_frames)?;
        report_skipped(source.skipped());
        summary
    };

    report(&summary, cli.summary_json)
}

fn report_skipped(skipped: usize) {
    if skipped > 0 {
        info!("{} malformed lines treated as empty frames", skipped);
    }
}

fn report(summary: &RunSummary, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    info!(
        "Processed {} frames ({} with a hand) in {}ms",
        summary.stats.frames, summary.stats.frames_with_hand, summary.processing_time_ms
    );
    info!(
        "{} gestures: {} swipes, {} hand states, {} commands sent",
        summary.events.len(),
        summary.stats.swipe_events,
        summary.stats.hand_state_events,
        summary.commands_sent
    );
    Ok(())
}
