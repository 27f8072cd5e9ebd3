//! # Sketch Clock Application Entry Point
//!
//! Reads the wall clock and battery, renders the sketched face into a
//! 128×64 frame buffer and prints it to the terminal. With `--watch` the face
//! is redrawn every minute by the same renderer, so the pencil wobble changes
//! from frame to frame.

use anyhow::{bail, Context};
use chrono::{Local, Timelike};
use log::{debug, info, warn};
use sketch_clock_lib::{
    ascii::render_ascii,
    config::{BatteryConfig, Config},
    face::FaceRenderer,
    frame_buffer::FrameBuffer,
    reading::read_battery_percent,
    FaceReading,
};
use std::{env, thread, time::Duration};

const USAGE: &str = "\
Usage: sketch-clock [--config <path>] [--reading <json>] [--watch]

  --config <path>   configuration file (default: sketch-clock.toml)
  --reading <json>  render a fixed reading instead of the clock, e.g.
                    '{\"month\":7,\"day\":24,\"hour\":20,\"minute\":14,\"day_of_week\":4,\"battery_percent\":87}'
  --watch           redraw every minute
";

/// Command line options
#[derive(Debug, Default, PartialEq)]
struct Options {
    config_path: Option<String>,
    reading: Option<String>,
    watch: bool,
    help: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Options> {
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                options.config_path = Some(args.next().context("--config needs a path")?);
            }
            "--reading" => {
                options.reading = Some(args.next().context("--reading needs a JSON value")?);
            }
            "--watch" => options.watch = true,
            "-h" | "--help" => options.help = true,
            other => bail!("unknown argument {other:?}\n\n{USAGE}"),
        }
    }
    Ok(options)
}

/// Battery level from the configured capacity file, or the fallback value.
fn battery_percent(battery: &BatteryConfig) -> i16 {
    let Some(path) = &battery.capacity_path else {
        return battery.fallback_percent;
    };
    match read_battery_percent(path) {
        Ok(percent) => percent,
        Err(e) => {
            warn!(
                "Battery level unavailable from {path} ({e}), showing {}%",
                battery.fallback_percent
            );
            battery.fallback_percent
        }
    }
}

fn current_reading(options: &Options, config: &Config) -> anyhow::Result<FaceReading> {
    match &options.reading {
        Some(json) => serde_json::from_str(json).context("parse --reading"),
        None => Ok(FaceReading::now(battery_percent(&config.battery))),
    }
}

fn render_frame(
    renderer: &mut FaceRenderer,
    frame: &mut FrameBuffer,
    reading: &FaceReading,
) -> String {
    renderer.render(frame, reading);
    debug!(
        "frame {} has {} lit pixels",
        frame.frames(),
        frame.lit_pixels()
    );
    render_ascii(frame)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = parse_args(env::args().skip(1))?;
    if options.help {
        print!("{USAGE}");
        return Ok(());
    }

    let config = match &options.config_path {
        Some(path) => Config::try_load_from_path(path)
            .with_context(|| format!("load config from {path}"))?,
        None => Config::load(),
    };
    let prng = config.prng().context("configure jitter")?;
    let mut renderer = FaceRenderer::new(prng, config.layout);
    let mut frame = FrameBuffer::default();

    if !options.watch {
        let reading = current_reading(&options, &config)?;
        print!("{}", render_frame(&mut renderer, &mut frame, &reading));
        return Ok(());
    }

    info!("Watching the clock, press Ctrl-C to stop");
    loop {
        let reading = current_reading(&options, &config)?;
        // clear the terminal and home the cursor before each frame
        print!(
            "\x1b[2J\x1b[H{}",
            render_frame(&mut renderer, &mut frame, &reading)
        );
        let seconds_left = 60 - u64::from(Local::now().second().min(59));
        thread::sleep(Duration::from_secs(seconds_left));
    }
}
