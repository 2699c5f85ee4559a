//! Core raycasting module - pure, deterministic, and testable
//!
//! This module contains the world model and the pseudo-3D projection.
//! It has **zero dependencies** on the terminal, so everything here can be
//! exercised headless:
//!
//! - **Deterministic**: the same pose over the same world always samples the
//!   same cells
//! - **Testable**: every stage (projection, march, row sampling) is exposed
//!
//! # Module Structure
//!
//! - [`world`]: row-major glyph grid with checked and unchecked lookups
//! - [`player`]: player pose, camera and screen parameters
//! - [`projection`]: per-column rays through the projection plane
//! - [`raycast`]: fixed-step ray march and row sampling
//! - [`level`]: level file loader
//! - [`settings`]: validated configuration and the per-render snapshot
//! - [`rng`]: small LCG for decorative randomness
//!
//! # Example
//!
//! ```
//! use ascii_cast_core::{ColumnHits, Level, Sample, Screen, Camera, Settings};
//!
//! let level = Level::parse("3\n3\n###\n# #\n###\n1\n1\n").unwrap();
//! let settings = Settings::new(level, Screen::new(8, 6), Camera::default());
//!
//! let hits = ColumnHits::cast(
//!     &settings.world,
//!     &settings.player,
//!     &settings.camera,
//!     settings.screen,
//! );
//! assert!(matches!(hits.sample(4, 3), Sample::Wall('#') | Sample::Gap));
//! ```

pub mod level;
pub mod player;
pub mod projection;
pub mod raycast;
pub mod rng;
pub mod settings;
pub mod world;

pub use ascii_cast_types as types;

// Re-export commonly used types for convenience
pub use level::{Level, LevelFormatError};
pub use player::{Camera, Player, Screen};
pub use projection::Projection;
pub use raycast::{march, sample_row, ColumnHits, Hit, Sample};
pub use rng::SimpleRng;
pub use settings::{Config, ConfigurationError, Settings};
pub use world::World;
