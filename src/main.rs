//! Terminal raycaster (default binary).
//!
//! Loads a level, shows the title banner until a key press, then alternates between drawing a frame and blocking for
//! the next key press until Esc or Ctrl-C.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use ascii_cast::core::{Config, Settings, SimpleRng};
use ascii_cast::input::{map_key, should_quit};
use ascii_cast::term::{render, title, title_frame, CastView, FrameBuffer, TerminalRenderer};
use ascii_cast::types::{
    DEFAULT_CAMERA_DISTANCE, DEFAULT_CAMERA_WIDTH, DEFAULT_LEVEL_PATH, DEFAULT_SCREEN_HEIGHT,
    DEFAULT_SCREEN_WIDTH,
};

const TITLE: &str = "ASCII CAST";

#[derive(Parser)]
#[command(name = "ascii-cast", about = "First-person ASCII raycaster")]
struct Cli {
    /// Screen width in character cells
    #[arg(short = 'w', long = "width", default_value_t = DEFAULT_SCREEN_WIDTH as i64, allow_hyphen_values = true)]
    width: i64,

    /// Screen height in character cells
    #[arg(short = 'H', long = "height", default_value_t = DEFAULT_SCREEN_HEIGHT as i64, allow_hyphen_values = true)]
    height: i64,

    /// Distance of the projection plane ahead of the player
    #[arg(short = 'D', long = "distance", default_value_t = DEFAULT_CAMERA_DISTANCE, allow_hyphen_values = true)]
    distance: f32,

    /// Width of the projection plane
    #[arg(short = 'W', long = "fov-width", default_value_t = DEFAULT_CAMERA_WIDTH, allow_hyphen_values = true)]
    fov_width: f32,

    /// Level file to load
    #[arg(short = 'l', long = "level", default_value = DEFAULT_LEVEL_PATH)]
    level: PathBuf,

    /// Print the title and a single frame, then exit
    #[arg(long)]
    once: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            screen_width: self.width,
            screen_height: self.height,
            camera_distance: self.distance,
            camera_width: self.fov_width,
            level_path: self.level.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; keep them quiet by default so they do not tear the view.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    let mut settings = cli.config().build()?;

    if cli.once {
        return print_once(&settings);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn print_once(settings: &Settings) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let mut rng = SimpleRng::from_clock();
    for line in title(TITLE, settings.screen.width as usize, &mut rng) {
        writeln!(stdout, "{line}")?;
    }
    writeln!(stdout)?;
    writeln!(stdout)?;
    render(settings, &mut stdout)
}

/// Show the banner until a key is pressed. Returns `false` on a quit key.
fn show_title(term: &mut TerminalRenderer, width: u16) -> Result<bool> {
    let lines = title(TITLE, width as usize, &mut SimpleRng::from_clock());
    term.draw_swap(&mut title_frame(&lines))?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(!should_quit(key)),
            Event::Resize(..) => {
                term.invalidate();
                term.draw_swap(&mut title_frame(&lines))?;
            }
            _ => {}
        }
    }
}

fn run(term: &mut TerminalRenderer, settings: &mut Settings) -> Result<()> {
    if !show_title(term, settings.screen.width)? {
        return Ok(());
    }

    let view = CastView::default();
    let mut fb = FrameBuffer::new(settings.screen.width, settings.screen.height);

    loop {
        view.render_into(settings, &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    tracing::debug!("quit requested");
                    return Ok(());
                }
                if let Some(action) = map_key(key) {
                    settings.apply(action);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
