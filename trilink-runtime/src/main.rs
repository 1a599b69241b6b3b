// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use clap::{Parser, ValueHint};
use trilink::sink::{CsvSink, LogSink, RenderSink};

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Planar arm forward kinematics animator", long_about = None)]
struct Args {
    /// Configuration file.
    #[arg(short = 'c', long = "config", value_name = "FILE", value_hint = ValueHint::FilePath)]
    config: Option<std::path::PathBuf>,
    /// Number of animation instants.
    #[arg(short = 'n', long)]
    frames: Option<usize>,
    /// Delay between instants in milliseconds.
    #[arg(short, long)]
    interval: Option<u64>,
    /// Record frame poses to a CSV file.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    trace: Option<std::path::PathBuf>,
    /// Quiet output (no logging).
    #[arg(long)]
    quiet: bool,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use log::LevelFilter;

    let args = Args::parse();

    let mut config: trilink::Config = match &args.config {
        Some(path) => trilink::from_file(path)?,
        None => trilink::Config::default(),
    };

    if let Some(frames) = args.frames {
        config.animation.frames = frames;
    }
    if let Some(interval) = args.interval {
        config.animation.interval = interval;
    }

    let log_config = simplelog::ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();

    let log_level = if args.quiet {
        LevelFilter::Off
    } else {
        match args.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    simplelog::TermLogger::init(
        log_level,
        log_config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    log::trace!("{:#?}", config);

    let mut sinks: Vec<Box<dyn RenderSink>> = vec![Box::new(LogSink)];

    if let Some(path) = &args.trace {
        log::info!("Recording trace to {}", path.display());
        sinks.push(Box::new(CsvSink::from_path(path)?));
    }

    let animator = trilink::Animator::new(&config)?;
    let shown = animator.run(&mut sinks).await?;

    log::debug!("{} shown {} instants", env!("CARGO_BIN_NAME"), shown);

    Ok(())
}
