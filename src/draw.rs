//! Shape helpers layered on `imageproc`'s filled rectangle and circle primitives.

use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut},
    rect::Rect,
};

/// Fill a rectangle whose corners are quarter circles of `radius`.
///
/// The radius is clamped to half of the shorter side, and a radius of zero
/// degenerates into a plain filled rectangle.
pub fn fill_rounded_rect(canvas: &mut RgbImage, rect: Rect, radius: u32, color: Rgb<u8>) {
    let radius = radius.min(rect.width().min(rect.height()) / 2);
    if radius == 0 {
        draw_filled_rect_mut(canvas, rect, color);
        return;
    }

    let r = radius as i32;
    let inner_width = rect.width() - 2 * radius;
    let inner_height = rect.height() - 2 * radius;

    // Vertical band between the left and right corner columns
    if inner_width > 0 {
        draw_filled_rect_mut(
            canvas,
            Rect::at(rect.left() + r, rect.top()).of_size(inner_width, rect.height()),
            color,
        );
    }
    // Horizontal band between the top and bottom corner rows
    if inner_height > 0 {
        draw_filled_rect_mut(
            canvas,
            Rect::at(rect.left(), rect.top() + r).of_size(rect.width(), inner_height),
            color,
        );
    }

    let corners = [
        (rect.left() + r, rect.top() + r),
        (rect.right() - r, rect.top() + r),
        (rect.left() + r, rect.bottom() - r),
        (rect.right() - r, rect.bottom() - r),
    ];
    for center in corners {
        draw_filled_circle_mut(canvas, center, r, color);
    }
}

/// Fill a disk in `ring` color and cover its interior with `fill`,
/// leaving an outline `ring_width` pixels wide.
///
/// Both disks span `2 * radius + 1` pixels, so a disk of even diameter `d`
/// drawn with `radius = d / 2` comes out one pixel wider than `d`, matching an
/// inclusive bounding box of `d` pixels per side.
pub fn fill_ringed_disk(
    canvas: &mut RgbImage,
    center: (i32, i32),
    radius: i32,
    ring_width: i32,
    fill: Rgb<u8>,
    ring: Rgb<u8>,
) {
    draw_filled_circle_mut(canvas, center, radius, ring);

    let inner = radius - ring_width;
    if inner > 0 {
        draw_filled_circle_mut(canvas, center, inner, fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const PAINT: Rgb<u8> = Rgb([10, 200, 30]);
    const RING: Rgb<u8> = Rgb([200, 10, 30]);

    #[test]
    fn rounded_rect_leaves_corners_untouched() {
        let mut canvas = RgbImage::from_pixel(20, 20, BLACK);
        fill_rounded_rect(&mut canvas, Rect::at(2, 2).of_size(16, 10), 3, PAINT);

        // Outer corners fall outside the quarter circles
        assert_eq!(*canvas.get_pixel(2, 2), BLACK);
        assert_eq!(*canvas.get_pixel(17, 2), BLACK);
        assert_eq!(*canvas.get_pixel(2, 11), BLACK);
        assert_eq!(*canvas.get_pixel(17, 11), BLACK);

        // Edges and interior are filled
        assert_eq!(*canvas.get_pixel(10, 2), PAINT);
        assert_eq!(*canvas.get_pixel(2, 7), PAINT);
        assert_eq!(*canvas.get_pixel(10, 11), PAINT);
        assert_eq!(*canvas.get_pixel(10, 7), PAINT);

        // Nothing outside the rectangle
        assert_eq!(*canvas.get_pixel(1, 7), BLACK);
        assert_eq!(*canvas.get_pixel(18, 7), BLACK);
        assert_eq!(*canvas.get_pixel(10, 12), BLACK);
    }

    #[test]
    fn zero_radius_is_a_plain_rect() {
        let mut canvas = RgbImage::from_pixel(8, 8, BLACK);
        fill_rounded_rect(&mut canvas, Rect::at(1, 1).of_size(4, 4), 0, PAINT);

        assert_eq!(*canvas.get_pixel(1, 1), PAINT);
        assert_eq!(*canvas.get_pixel(4, 4), PAINT);
        assert_eq!(*canvas.get_pixel(5, 5), BLACK);
    }

    #[test]
    fn oversized_radius_is_clamped() {
        let mut canvas = RgbImage::from_pixel(12, 12, BLACK);
        fill_rounded_rect(&mut canvas, Rect::at(0, 0).of_size(11, 11), 40, PAINT);

        // Behaves like a disk of radius 5 centred at (5, 5)
        assert_eq!(*canvas.get_pixel(5, 5), PAINT);
        assert_eq!(*canvas.get_pixel(5, 0), PAINT);
        assert_eq!(*canvas.get_pixel(0, 0), BLACK);
        assert_eq!(*canvas.get_pixel(11, 11), BLACK);
    }

    #[test]
    fn ringed_disk_has_outline_and_fill() {
        let mut canvas = RgbImage::from_pixel(21, 21, BLACK);
        fill_ringed_disk(&mut canvas, (10, 10), 8, 2, PAINT, RING);

        assert_eq!(*canvas.get_pixel(10, 10), PAINT);
        assert_eq!(*canvas.get_pixel(10, 7), PAINT);
        assert_eq!(*canvas.get_pixel(10, 3), RING);
        assert_eq!(*canvas.get_pixel(17, 10), RING);
        assert_eq!(*canvas.get_pixel(0, 0), BLACK);
    }

    #[test]
    fn ring_wider_than_radius_covers_whole_disk() {
        let mut canvas = RgbImage::from_pixel(9, 9, BLACK);
        fill_ringed_disk(&mut canvas, (4, 4), 2, 3, PAINT, RING);

        assert_eq!(*canvas.get_pixel(4, 4), RING);
        assert_eq!(*canvas.get_pixel(0, 0), BLACK);
    }
}
