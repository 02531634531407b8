use crate::error::GenerateError;
use crate::render::render;
use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};

/// Pixel sizes of the published icon set, in generation order.
pub const ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// File name an icon of `size` pixels is written under.
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

/// Renders and writes one PNG per requested size.
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    sizes: &'a [u32],
    output_dir: PathBuf,
    png_encoder: bool,
}

impl<'a> Generator<'a> {
    /// A generator writing into the current directory.
    pub fn new(sizes: &'a [u32]) -> Self {
        Self {
            sizes,
            output_dir: PathBuf::from("."),
            png_encoder: cfg!(feature = "png"),
        }
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Behave as a build without the `png` feature.
    pub fn without_png_encoder(mut self) -> Self {
        self.png_encoder = false;
        self
    }

    /// Write every icon, stopping at the first failure.
    ///
    /// Returns the paths written, in the order of the size list.
    pub fn generate_all(&self) -> Result<Vec<PathBuf>, GenerateError> {
        if !self.png_encoder {
            return Err(GenerateError::MissingDependency {
                component: "PNG encoder",
                remedy: "Rebuild with the `png` feature: cargo build --features png",
            });
        }

        println!("Generating app icons...");
        let mut written = Vec::with_capacity(self.sizes.len());
        for &size in self.sizes {
            let filename = icon_file_name(size);
            let path = self.output_dir.join(&filename);
            save_png(&render(size), &path)?;
            println!("  ✓ Generated {filename}");
            written.push(path);
        }

        println!("✨ All icons generated");
        println!("📁 Files created: {} icons", written.len());
        Ok(written)
    }
}

fn save_png(canvas: &RgbImage, path: &Path) -> Result<(), GenerateError> {
    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        })
}
