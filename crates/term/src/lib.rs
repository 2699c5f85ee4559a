//! Terminal rendering module.
//!
//! Turns a [`core::Settings`] snapshot into a framebuffer of styled character
//! cells and flushes it to a terminal or any writer.
//!
//! Pipeline:
//! - [`cast_view`] composes frame, minimap and raycast view per cell
//! - [`glyph`] applies the fill mode to wall glyphs
//! - [`renderer`] encodes framebuffers with crossterm

pub mod cast_view;
pub mod fb;
pub mod glyph;
pub mod renderer;
pub mod title;

pub use ascii_cast_core as core;
pub use ascii_cast_types as types;

pub use cast_view::{frame_glyph, Arrow, CastView};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use glyph::{bucket_colour, fill_cell, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, encode_lines_into, render, TerminalRenderer};
pub use title::{maze, title, title_frame};
