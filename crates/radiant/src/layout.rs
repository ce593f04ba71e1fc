//! Geometric layout: radial satellite placement and connector clipping.
//!
//! Both halves are pure functions over [`radiant_core::geometry`] values;
//! the [`Diagram`](crate::Diagram) decides when to call them.

mod connector;
mod radial;

pub use connector::{AmbiguousGeometry, GeometryWarning, Placement, Route, classify, clip, connect};
pub use radial::{place, radius_for_canvas};
