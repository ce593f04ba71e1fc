//! Even angular placement of satellites around a hub.

use log::trace;

use radiant_core::geometry::{Point, Size};

use crate::config::LayoutConfig;

/// Returns `count` points evenly spaced on a circle.
///
/// The first point sits at `start_angle_deg` degrees from +x and each next
/// point is `360 / count` degrees further clockwise (screen Y grows
/// downward). `count == 0` yields an empty vector. The radius is used as
/// given, even when it is zero or negative.
///
/// # Examples
///
/// ```
/// # use radiant::layout::place;
/// # use radiant_core::geometry::Point;
/// let points = place(Point::new(200.0, 200.0), 100.0, 4, 0.0);
/// assert_eq!(points.len(), 4);
/// assert!((points[1].y() - 300.0).abs() < 1e-3); // 90 degrees is straight down
/// ```
pub fn place(center: Point, radius: f32, count: usize, start_angle_deg: f32) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    let step = 360.0 / count as f32;
    trace!(count, step, radius; "Placing points on circle");

    (0..count)
        .map(|i| {
            let theta = (start_angle_deg + i as f32 * step).to_radians();
            Point::new(
                center.x() + theta.cos() * radius,
                center.y() + theta.sin() * radius,
            )
        })
        .collect()
}

/// Derives the placement radius for a canvas.
///
/// `min(w/2 - img - vertical_margin, h/2 - (img + horizontal_margin + text_margin))`.
/// The result is not clamped; undersized canvases give zero or negative radii.
pub fn radius_for_canvas(canvas: Size, layout: &LayoutConfig) -> f32 {
    let img = layout.img_size();
    let horizontal_room = canvas.width() / 2.0 - img - layout.vertical_margin();
    let vertical_room =
        canvas.height() / 2.0 - (img + layout.horizontal_margin() + layout.text_margin());
    horizontal_room.min(vertical_room)
}
