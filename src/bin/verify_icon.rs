use anyhow::{bail, Context, Result};
use camera_icons::{gradient_color, render::WHITE, Geometry};
use clap::Parser;
use image::Rgb;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "verify_icon",
    about = "Check a generated camera icon for the expected layout"
)]
struct Args {
    /// PNG file written by camera-icons.
    #[clap(value_name = "PATH", default_value = "icon-512.png")]
    path: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let img = image::open(&args.path)
        .with_context(|| format!("Failed to open {}", args.path.display()))?
        .to_rgb8();
    let (width, height) = img.dimensions();

    println!("Checking icon: {}", args.path.display());
    println!("Image dimensions: {}x{}", width, height);

    if width != height {
        bail!("icon must be square, got {width}x{height}");
    }
    let size = width;
    let mut failures = 0;

    let top = *img.get_pixel(0, 0);
    failures += report("gradient start", top == gradient_color(0, size), top);

    let bottom = *img.get_pixel(0, size - 1);
    let Rgb(expected) = gradient_color(size - 1, size);
    let close = bottom
        .0
        .iter()
        .zip(expected)
        .all(|(&got, want)| got.abs_diff(want) <= 1);
    failures += report("gradient end", close, bottom);

    let corner = *img.get_pixel(size - 1, 0);
    failures += report(
        "corner is background",
        corner != WHITE && corner == gradient_color(0, size),
        corner,
    );

    let (lens_x, lens_y) = Geometry::new(size).lens_center();
    let lens = *img.get_pixel(lens_x as u32, lens_y as u32);
    failures += report("lens centre is white", lens == WHITE, lens);

    if failures > 0 {
        bail!("{failures} check(s) failed for {}", args.path.display());
    }
    println!("\n✓ Icon layout looks right");
    Ok(())
}

fn report(check: &str, passed: bool, pixel: Rgb<u8>) -> u32 {
    let [r, g, b] = pixel.0;
    if passed {
        println!("  ✓ {check}: RGB [{r}, {g}, {b}]");
        0
    } else {
        println!("  ⚠ {check}: RGB [{r}, {g}, {b}]");
        1
    }
}
