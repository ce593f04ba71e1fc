//! Drawing definitions and the rendering surface interface.
//!
//! - [`StrokeDefinition`] - connector line appearance
//! - [`TextDefinition`] - label appearance, measured with [`measure_text`]
//! - [`LayeredOutput`] - z-ordered SVG node collection
//! - [`Surface`] - the collaborator that turns primitives into output

mod layer;
mod stroke;
mod surface;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};
pub use surface::{FilterDescriptor, Surface};
pub use text::{TextDefinition, measure_text};
