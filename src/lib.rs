//! Procedural generator for the camera app icon set.
//!
//! [`render`] draws one icon into an owned RGB canvas; [`Generator`] writes
//! the whole set to disk as `icon-{size}.png`.

pub mod draw;
pub mod error;
pub mod generate;
pub mod render;

pub use error::GenerateError;
pub use generate::{icon_file_name, Generator, ICON_SIZES};
pub use render::{gradient_color, render, Geometry};
