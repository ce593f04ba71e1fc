//! SVG rendering surface.

use std::{fs, path::Path};

use indexmap::IndexMap;
use log::{debug, error, info};
use svg::{
    Document,
    node::{Text as SvgText, element as svg_element},
};

use radiant_core::{
    apply_stroke,
    color::Color,
    draw::{
        FilterDescriptor, LayeredOutput, RenderLayer, StrokeDefinition, Surface, TextDefinition,
    },
    geometry::{Bounds, Point, Segment, Size},
};

use crate::export;

/// A [`Surface`] that collects SVG elements and renders them as a document.
///
/// Label background filters are created the first time a descriptor is used
/// and kept until [`Surface::clear`].
#[derive(Debug)]
pub struct SvgSurface {
    size: Size,
    background: Option<Color>,
    output: LayeredOutput,
    offset: Point,
    filters: IndexMap<FilterDescriptor, String>,
}

impl SvgSurface {
    pub fn new(size: Size, background: Option<Color>) -> Self {
        Self {
            size,
            background,
            output: LayeredOutput::new(),
            offset: Point::default(),
            filters: IndexMap::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Number of distinct filters created so far.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Takes everything drawn since the last call and wraps it in a document.
    ///
    /// Cached filters stay on the surface and are emitted in every document.
    pub fn take_document(&mut self) -> Document {
        let output = std::mem::take(&mut self.output);
        let mut doc = Document::new()
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set(
                "viewBox",
                format!("0 0 {} {}", self.size.width(), self.size.height()),
            );

        if !self.filters.is_empty() {
            let defs = self
                .filters
                .iter()
                .fold(svg_element::Definitions::new(), |defs, (descriptor, id)| {
                    defs.add(filter_element(descriptor, id))
                });
            doc = doc.add(defs);
        }

        let mut background = LayeredOutput::new();
        if let Some(color) = &self.background {
            let rect = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", self.size.width())
                .set("height", self.size.height())
                .set("fill", color)
                .set("fill-opacity", color.alpha());
            background.add_to_layer(RenderLayer::Background, Box::new(rect));
        }
        background.merge(output);

        background
            .render()
            .into_iter()
            .fold(doc, |doc, group| doc.add(group))
    }

    fn node_transform(&self) -> Option<String> {
        (!self.offset.is_zero())
            .then(|| format!("translate({} {})", self.offset.x(), self.offset.y()))
    }

    fn text_element(
        &self,
        definition: &TextDefinition,
        text: &str,
        anchor: Point,
    ) -> svg_element::Text {
        let lines: Vec<&str> = text.lines().collect();
        let total_height = self.measure_text(definition, text).height();
        let line_height = if lines.is_empty() {
            0.0
        } else {
            total_height / lines.len() as f32
        };
        let y_offset = -(total_height + line_height) / 2.0;

        let element = svg_element::Text::new("")
            .set("x", anchor.x())
            .set("y", anchor.y() + y_offset)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", definition.font_family())
            .set("font-size", definition.font_size());

        lines.into_iter().fold(element, |element, line| {
            element.add(
                svg_element::TSpan::new("")
                    .set("x", anchor.x())
                    .set("dy", line_height)
                    .add(SvgText::new(line)),
            )
        })
    }

    /// Returns the id of the filter for `descriptor`, creating it on first use.
    fn filter_id(&mut self, descriptor: FilterDescriptor) -> String {
        if let Some(id) = self.filters.get(&descriptor) {
            return id.clone();
        }
        let id = descriptor.id();
        debug!(id; "Creating filter");
        self.filters.insert(descriptor, id.clone());
        id
    }
}

fn filter_element(descriptor: &FilterDescriptor, id: &str) -> svg_element::Filter {
    match descriptor {
        FilterDescriptor::TextBackground(color) => svg_element::Filter::new()
            .set("id", id)
            .set("x", 0)
            .set("y", 0)
            .set("width", 1)
            .set("height", 1)
            .add(
                svg_element::FilterEffectFlood::new()
                    .set("flood-color", color)
                    .set("flood-opacity", color.alpha()),
            )
            .add(svg_element::FilterEffectComposite::new().set("in", "SourceGraphic")),
    }
}

impl Surface for SvgSurface {
    fn draw_image(&mut self, href: &str, bounds: Bounds) {
        let mut image = svg_element::Image::new()
            .set("href", href)
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("preserveAspectRatio", "none");
        if let Some(transform) = self.node_transform() {
            image = image.set("transform", transform);
        }
        self.output.add_to_layer(RenderLayer::Node, Box::new(image));
    }

    fn draw_text(&mut self, definition: &TextDefinition, text: &str, anchor: Point) {
        let mut element = self.text_element(definition, text, anchor);
        if let Some(transform) = self.node_transform() {
            element = element.set("transform", transform);
        }
        self.output.add_to_layer(RenderLayer::Node, Box::new(element));
    }

    fn draw_line(&mut self, segment: Segment, stroke: &StrokeDefinition) {
        let line = svg_element::Line::new()
            .set("x1", segment.start().x())
            .set("y1", segment.start().y())
            .set("x2", segment.end().x())
            .set("y2", segment.end().y());
        let line = apply_stroke!(line, stroke);
        self.output.add_to_layer(RenderLayer::Connector, Box::new(line));
    }

    fn draw_label(&mut self, definition: &TextDefinition, text: &str, anchor: Point) {
        let mut element = self.text_element(definition, text, anchor);
        if let Some(descriptor) = FilterDescriptor::for_text(definition) {
            let id = self.filter_id(descriptor);
            element = element.set("filter", format!("url(#{id})"));
        }
        self.output.add_to_layer(RenderLayer::Label, Box::new(element));
    }

    fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    fn clear(&mut self) {
        self.output.clear();
        self.filters.clear();
        self.offset = Point::default();
    }
}

/// Writes `doc` to `path`.
pub fn write_document(path: &Path, doc: &Document) -> Result<(), export::Error> {
    info!(path = path.display().to_string(); "Writing SVG file");
    fs::write(path, doc.to_string()).map_err(|err| {
        error!(path = path.display().to_string(), err:err; "Failed to write SVG file");
        export::Error::Write {
            path: path.to_path_buf(),
            source: err,
        }
    })
}
