//! Procedural drawing of the camera icon.

use crate::draw::{fill_ringed_disk, fill_rounded_rect};
use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut},
    rect::Rect,
};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const ACCENT: Rgb<u8> = Rgb([255, 107, 53]);
pub const FLASH: Rgb<u8> = Rgb([247, 193, 30]);

/// Top of the background gradient.
pub const GRADIENT_START: Rgb<u8> = ACCENT;

/// Pixel dimensions of every element, derived from the icon size.
///
/// Ratios are rounded half-up so that a given size always produces the same
/// layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub size: u32,
    pub disk_diameter: u32,
    pub disk_ring: u32,
    pub camera_size: u32,
    pub camera_x: u32,
    pub camera_y: u32,
    pub body_radius: u32,
    pub lens_diameter: u32,
    pub lens_ring: u32,
    pub flash_diameter: u32,
    pub flash_x: u32,
    pub flash_y: u32,
}

impl Geometry {
    pub fn new(size: u32) -> Self {
        assert!(size > 0, "icon size must be positive");

        let camera_size = scale(size, 0.4).max(1);
        let camera_x = (size - camera_size) / 2;
        let camera_y = (size - camera_size) / 2;

        Self {
            size,
            disk_diameter: scale(size, 0.7),
            disk_ring: scale(size, 0.03).max(1),
            camera_size,
            camera_x,
            camera_y,
            body_radius: scale(camera_size, 0.1),
            lens_diameter: scale(camera_size, 0.35),
            lens_ring: scale(size, 0.02).max(1),
            flash_diameter: scale(camera_size, 0.15),
            flash_x: camera_x + scale(camera_size, 0.75),
            flash_y: camera_y + scale(camera_size, 0.35),
        }
    }

    /// Camera body: the lower three quarters of the camera box.
    pub fn body(&self) -> Rect {
        let top = self.camera_y + self.camera_size / 4;
        Rect::at(self.camera_x as i32, top as i32)
            .of_size(self.camera_size, self.camera_y + self.camera_size - top)
    }

    pub fn lens_center(&self) -> (i32, i32) {
        let half = self.camera_size / 2;
        ((self.camera_x + half) as i32, (self.camera_y + half) as i32)
    }

    pub fn flash_center(&self) -> (i32, i32) {
        let half = self.flash_diameter / 2;
        ((self.flash_x + half) as i32, (self.flash_y + half) as i32)
    }
}

fn scale(value: u32, ratio: f64) -> u32 {
    (value as f64 * ratio).round() as u32
}

/// Background color of `row` on an icon `size` pixels tall.
pub fn gradient_color(row: u32, size: u32) -> Rgb<u8> {
    let t = row as f64 / size as f64;
    Rgb([
        (255.0 - t * 8.0) as u8,
        (107.0 + t * 114.0) as u8,
        (53.0 - t * 23.0) as u8,
    ])
}

/// Draw the icon at `size` × `size` pixels.
///
/// # Panics
///
/// If `size` is zero.
pub fn render(size: u32) -> RgbImage {
    let geometry = Geometry::new(size);
    let mut canvas = RgbImage::new(size, size);

    for row in 0..size {
        draw_filled_rect_mut(
            &mut canvas,
            Rect::at(0, row as i32).of_size(size, 1),
            gradient_color(row, size),
        );
    }

    let middle = (size / 2) as i32;
    fill_ringed_disk(
        &mut canvas,
        (middle, middle),
        (geometry.disk_diameter / 2) as i32,
        geometry.disk_ring as i32,
        WHITE,
        ACCENT,
    );

    fill_rounded_rect(&mut canvas, geometry.body(), geometry.body_radius, ACCENT);

    fill_ringed_disk(
        &mut canvas,
        geometry.lens_center(),
        (geometry.lens_diameter / 2) as i32,
        geometry.lens_ring as i32,
        WHITE,
        ACCENT,
    );

    draw_filled_circle_mut(
        &mut canvas,
        geometry.flash_center(),
        (geometry.flash_diameter / 2) as i32,
        FLASH,
    );

    canvas
}
