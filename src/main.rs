use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use air_mouse::cli::Cli;
use air_mouse::controller::ControlLoop;
use air_mouse::gestures::GestureEngine;
use air_mouse::input::{
    default_cursor_provider, DryRunSink, FailSafeSink, FixedScreenGeometry, InputSink,
    RdevInputSink, RdevScreenGeometry, ScreenGeometry,
};
use air_mouse::logging;
use air_mouse::settings::Settings;
use air_mouse::source::ReplaySource;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(&cli.settings)
        .with_context(|| format!("failed to load settings from {}", cli.settings))?;
    logging::init(
        cli.verbose || settings.debug_logging,
        settings.log_file.as_ref().map(PathBuf::from),
    );
    if !Path::new(&cli.settings).exists() {
        if let Err(err) = settings.save(&cli.settings) {
            tracing::warn!(?err, path = %cli.settings, "failed to write default settings");
        }
    }

    let geometry: Box<dyn ScreenGeometry> = match settings.screen_size {
        Some((width, height)) => Box::new(FixedScreenGeometry::new(width, height)),
        None => Box::new(RdevScreenGeometry),
    };
    let (screen_width, screen_height) = geometry.screen_size()?;
    tracing::info!(screen_width, screen_height, "display size");

    let engine = GestureEngine::new(settings.engine_config(screen_width, screen_height))?;
    let source = ReplaySource::open(&cli.input, settings.replay_options())?;

    let sink: Box<dyn InputSink> = if cli.dry_run {
        Box::new(DryRunSink::default())
    } else {
        Box::new(RdevInputSink::new())
    };
    let sink: Box<dyn InputSink> = if settings.fail_safe && !cli.dry_run {
        Box::new(FailSafeSink::new(
            sink,
            default_cursor_provider(),
            (screen_width, screen_height),
            settings.fail_safe_margin_px,
        ))
    } else {
        sink
    };

    ControlLoop::new(engine, source, sink).run()?;
    Ok(())
}
