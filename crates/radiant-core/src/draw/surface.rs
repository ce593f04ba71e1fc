//! The rendering surface collaborator.
//!
//! The layout engine never produces pixels or markup itself. It asks a
//! [`Surface`] how large a label is and hands it drawing primitives with the
//! computed geometry. Surfaces own their drawing resources, including any
//! filters created for label backgrounds (see [`FilterDescriptor`]).

use crate::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition, measure_text},
    geometry::{Bounds, Point, Segment, Size},
};

/// Describes a reusable filter effect a surface may need to create.
///
/// Surfaces create a filter the first time a descriptor is used and reuse it
/// for every later draw call with an equal descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterDescriptor {
    /// Flood the text's box with a color before compositing the glyphs.
    TextBackground(Color),
}

impl FilterDescriptor {
    /// Returns the filter required to draw text styled by `definition`, if any.
    pub fn for_text(definition: &TextDefinition) -> Option<Self> {
        definition.background_color().copied().map(Self::TextBackground)
    }

    /// Returns a document-unique id for this filter.
    pub fn id(&self) -> String {
        match self {
            Self::TextBackground(color) => format!("text-bg-{}", color.to_id_safe_string()),
        }
    }
}

/// A target for drawing primitives.
///
/// Coordinates are absolute canvas coordinates. Node content (images and
/// node labels) and connector content (lines and their labels) are drawn
/// through separate primitives: while a drag gesture is in progress only
/// node content is shifted by [`Surface::set_offset`], because connectors
/// are recomputed against the shifted geometry.
pub trait Surface {
    /// Measures the size `text` occupies when drawn with `definition`.
    fn measure_text(&self, definition: &TextDefinition, text: &str) -> Size {
        measure_text(definition, text)
    }

    /// Draws a node image stretched over `bounds`.
    fn draw_image(&mut self, href: &str, bounds: Bounds);

    /// Draws a node label centered on `anchor`.
    fn draw_text(&mut self, definition: &TextDefinition, text: &str, anchor: Point);

    /// Draws a connector line.
    fn draw_line(&mut self, segment: Segment, stroke: &StrokeDefinition);

    /// Draws a connector label centered on `anchor`, over the line.
    ///
    /// If `definition` carries a background color the surface paints it
    /// behind the glyphs, creating the filter for
    /// [`FilterDescriptor::for_text`] on first use.
    fn draw_label(&mut self, definition: &TextDefinition, text: &str, anchor: Point);

    /// Sets the visual translation applied to node content.
    fn set_offset(&mut self, offset: Point);

    /// Releases every primitive and cached resource. Calling it twice is a no-op.
    fn clear(&mut self);
}
