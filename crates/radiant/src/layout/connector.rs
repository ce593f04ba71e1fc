//! Connector clipping between two node bounding boxes.
//!
//! A connector runs along the line through both box centers, but starts and
//! ends `margin` away from the facing edges so it never overlaps either
//! node. Which edges face each other is decided by [`classify`]; the
//! missing coordinate of each endpoint is then read off the center line.

use log::warn;
use thiserror::Error;

use radiant_core::geometry::{Bounds, Point, Segment};

/// Position of the first box relative to the second one.
///
/// Tested in declaration order; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// `a.max_x + margin < b.min_x`
    LeftOf,
    /// `b.max_x + margin < a.min_x`
    RightOf,
    /// `a.max_y + margin < b.min_y`
    Above,
    /// `b.max_y + margin < a.min_y`
    Below,
}

impl Placement {
    /// True when the connector is clipped on vertical edges.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::LeftOf | Self::RightOf)
    }
}

/// The two boxes overlap, or are closer than the margin, on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("boxes are neither left/right of nor above/below each other with margin {margin}")]
pub struct AmbiguousGeometry {
    margin: f32,
}

/// Classifies `a` relative to `b`, or `None` when no direction applies.
pub fn classify(a: Bounds, b: Bounds, margin: f32) -> Option<Placement> {
    if a.max_x() + margin < b.min_x() {
        Some(Placement::LeftOf)
    } else if b.max_x() + margin < a.min_x() {
        Some(Placement::RightOf)
    } else if a.max_y() + margin < b.min_y() {
        Some(Placement::Above)
    } else if b.max_y() + margin < a.min_y() {
        Some(Placement::Below)
    } else {
        None
    }
}

/// Computes the clipped connector between `a` and `b`.
///
/// For horizontal placements the x-coordinates are the facing edges offset
/// by `margin` and the y-coordinates follow the center line; vertical
/// placements work the other way round. The segment is ordered by
/// increasing x (or y), so `clip(a, b)` and `clip(b, a)` return the same
/// endpoints, possibly swapped.
///
/// # Errors
///
/// Returns [`AmbiguousGeometry`] when [`classify`] finds no placement or
/// the center line yields a non-finite endpoint.
///
/// # Examples
///
/// ```
/// # use radiant::layout::clip;
/// # use radiant_core::geometry::{Bounds, Point};
/// let a = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
/// let b = Bounds::from_corners(Point::new(20.0, 0.0), Point::new(30.0, 10.0));
///
/// let segment = clip(a, b, 2.0).unwrap();
/// assert_eq!(segment.start(), Point::new(12.0, 5.0));
/// assert_eq!(segment.end(), Point::new(18.0, 5.0));
/// ```
pub fn clip(a: Bounds, b: Bounds, margin: f32) -> Result<Segment, AmbiguousGeometry> {
    let placement = classify(a, b, margin).ok_or(AmbiguousGeometry { margin })?;

    let center_a = a.center();
    let center_b = b.center();
    let dx = center_b.x() - center_a.x();
    let dy = center_b.y() - center_a.y();
    // The center line is evaluated relative to the midpoint of both centers.
    // The midpoint and slopes are identical for (a, b) and (b, a), and the
    // offsets stay small, so steep lines do not lose precision.
    let anchor = center_a.midpoint(center_b);

    let segment = if placement.is_horizontal() {
        let (x1, x2) = match placement {
            Placement::LeftOf => (a.max_x() + margin, b.min_x() - margin),
            _ => (b.max_x() + margin, a.min_x() - margin),
        };
        let slope_xy = dy / dx;
        let y_at = |x: f32| anchor.y() + (x - anchor.x()) * slope_xy;
        Segment::new(Point::new(x1, y_at(x1)), Point::new(x2, y_at(x2)))
    } else {
        let (y1, y2) = match placement {
            Placement::Above => (a.max_y() + margin, b.min_y() - margin),
            _ => (b.max_y() + margin, a.min_y() - margin),
        };
        let slope_yx = dx / dy;
        let x_at = |y: f32| anchor.x() + (y - anchor.y()) * slope_yx;
        Segment::new(Point::new(x_at(y1), y1), Point::new(x_at(y2), y2))
    };

    // A negative margin can classify boxes with aligned centers, making the
    // slope infinite.
    let finite = [segment.start(), segment.end()]
        .iter()
        .all(|p| p.x().is_finite() && p.y().is_finite());
    if !finite {
        return Err(AmbiguousGeometry { margin });
    }
    Ok(segment)
}

/// A per-connector geometry problem that was worked around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryWarning {
    /// The boxes could not be classified; the connector joins the two
    /// centers without clipping.
    Ambiguous(AmbiguousGeometry),
}

/// Result of [`connect`]: the segment to draw and any fallback taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    segment: Segment,
    warning: Option<GeometryWarning>,
}

impl Route {
    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn warning(&self) -> Option<GeometryWarning> {
        self.warning
    }
}

/// Like [`clip`], but falls back to the straight center-to-center line when
/// the geometry is ambiguous, recording a [`GeometryWarning`].
pub fn connect(a: Bounds, b: Bounds, margin: f32) -> Route {
    match clip(a, b, margin) {
        Ok(segment) => Route {
            segment,
            warning: None,
        },
        Err(err) => {
            warn!(margin; "Connector endpoints are ambiguous, joining centers instead");
            Route {
                segment: Segment::new(a.center(), b.center()),
                warning: Some(GeometryWarning::Ambiguous(err)),
            }
        }
    }
}
