//! Headless carousel session simulator.
//!
//! Replays a scripted interaction against a catalog and options preset with
//! synthetic 60 fps frames, logging every committed focus change. Useful for
//! tuning presets without a browser.

use std::path::PathBuf;
use std::process::ExitCode;

use carousel::catalog::ModelCatalog;
use carousel::input::{PointerEvent, PointerId};
use carousel::options::Options;
use carousel::util::frame::Frame;
use carousel::{Carousel, CarouselError};
use clap::{Parser, ValueEnum};

const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Script {
    /// Press "next" once per model, letting each animation settle.
    Tour,
    /// Fast drag to the right, released mid-slot.
    Flick,
    /// Slow drag that snaps back to the nearest model.
    Drag,
    /// No input; only auto-rotation (if enabled in the options).
    Idle,
}

#[derive(Debug, Parser)]
#[command(name = "carousel-sim", about = "Replay a scripted carousel session")]
struct Args {
    /// Model catalog TOML (defaults to the built-in portfolio).
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Options preset TOML (defaults to built-in options).
    #[arg(long)]
    options: Option<PathBuf>,
    /// Interaction to replay.
    #[arg(long, value_enum, default_value = "tour")]
    script: Script,
    /// Simulated session length after the script, in milliseconds.
    #[arg(long, default_value_t = 1500.0)]
    settle_ms: f64,
}

struct Session {
    carousel: Carousel,
    frame: Frame,
}

impl Session {
    fn now_ms(&self) -> f64 {
        self.frame.now_ms
    }

    fn run_frames(&mut self, duration_ms: f64) {
        let end = self.now_ms() + duration_ms;
        while self.now_ms() < end {
            self.frame = self.frame.advance_to(self.now_ms() + FRAME_MS);
            let _ = self.carousel.tick(self.frame);
        }
    }

    /// Drag `distance_px` over `duration_ms`, one move per frame.
    fn drag(&mut self, distance_px: f32, duration_ms: f64) {
        let id = PointerId(1);
        let frames = (duration_ms / FRAME_MS).ceil().max(1.0) as u32;
        let step = distance_px / frames as f32;
        let start = self.now_ms();
        self.carousel
            .handle_pointer(PointerEvent::down(id, 0.0, 0.0, start));
        for i in 1..=frames {
            self.run_frames(FRAME_MS);
            let now = self.now_ms();
            self.carousel
                .handle_pointer(PointerEvent::moved(id, step * i as f32, 0.0, now));
        }
        let end = self.now_ms();
        self.carousel
            .handle_pointer(PointerEvent::up(id, distance_px, 0.0, end));
    }
}

fn run(args: &Args) -> Result<(), CarouselError> {
    let catalog = match &args.catalog {
        Some(path) => ModelCatalog::load(path)?,
        None => ModelCatalog::portfolio(),
    };
    let options = match &args.options {
        Some(path) => {
            let options = Options::load(path)?;
            log::info!("Loaded options preset {}", path.display());
            options
        }
        None => Options::default(),
    };
    let settle_ms = options.rotation.animation_duration_ms
        + options.focus.debounce_ms
        + 100.0;

    let mut carousel = Carousel::new(catalog, options);
    carousel.set_focus_listener(|event| match (&event.identity, event.index) {
        (Some(identity), Some(index)) => {
            log::info!("focused #{index}: {identity}");
        }
        _ => log::info!("focus cleared"),
    });

    let mut session = Session {
        carousel,
        frame: Frame::at(0.0, 0.0),
    };
    session.run_frames(settle_ms);

    match args.script {
        Script::Tour => {
            for _ in 0..session.carousel.catalog().len() {
                if let Some(target) = session.carousel.next() {
                    log::info!("next -> #{target}");
                }
                session.run_frames(settle_ms);
            }
        }
        Script::Flick => session.drag(120.0, 120.0),
        Script::Drag => session.drag(60.0, 1200.0),
        Script::Idle => {}
    }
    session.run_frames(args.settle_ms);

    let carousel = &session.carousel;
    log::info!(
        "session ended at {:.0} ms: yaw {:.3} rad, focused {:?}, backdrop {:?}",
        session.now_ms(),
        carousel.angle(),
        carousel.focused().map(|entry| entry.identity.as_str()),
        carousel.backdrop()
    );
    if let Some(pointer) = session.carousel.detach() {
        log::warn!("pointer {pointer:?} still captured at exit");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
