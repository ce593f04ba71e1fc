//! The diagram model: a central node, its satellites and the connections
//! between them.
//!
//! A [`Diagram`] is built once from [`NodeSpec`]s. Nodes are never added or
//! removed afterwards; they only move, and every move re-derives the
//! connector geometry through [`connect`](crate::layout::connect).

use indexmap::IndexMap;
use log::{debug, info, warn};
use serde::Deserialize;

use radiant_core::{
    draw::{StrokeDefinition, Surface, TextDefinition},
    geometry::{Bounds, Point, Segment, Size},
    identifier::Id,
};

use crate::{
    RadiantError,
    config::LayoutConfig,
    hooks::DiagramHooks,
    layout::{GeometryWarning, connect, place, radius_for_canvas},
};

/// Host description of a node, before layout.
///
/// ```
/// # use radiant::NodeSpec;
/// let spec = NodeSpec::new("Billing", "img/billing.png")
///     .with_id("billing")
///     .with_connect_label("invoices");
/// assert_eq!(spec.connect_label(), Some("invoices"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NodeSpec {
    #[serde(default)]
    id: Option<Id>,
    #[serde(default)]
    label: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    connect_label: Option<String>,
}

impl NodeSpec {
    pub fn new(label: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            image: image.into(),
            connect_label: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(Id::new(id));
        self
    }

    /// Sets the label drawn on the connection to this node. Ignored for the
    /// central node.
    pub fn with_connect_label(mut self, label: impl Into<String>) -> Self {
        self.connect_label = Some(label.into());
        self
    }

    pub fn id(&self) -> Option<Id> {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn connect_label(&self) -> Option<&str> {
        self.connect_label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }
}

/// A whole diagram description: the hub and its satellites.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DiagramSpec {
    central: NodeSpec,
    #[serde(default)]
    satellites: Vec<NodeSpec>,
}

impl DiagramSpec {
    pub fn new(central: NodeSpec, satellites: Vec<NodeSpec>) -> Self {
        Self {
            central,
            satellites,
        }
    }

    pub fn central(&self) -> &NodeSpec {
        &self.central
    }

    pub fn satellites(&self) -> &[NodeSpec] {
        &self.satellites
    }
}

/// A laid-out node: an image with a label below it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: Id,
    label: String,
    image: String,
    position: Point,
    image_bounds: Bounds,
    label_bounds: Option<Bounds>,
}

impl Node {
    /// Lays out a node centered on `position`.
    ///
    /// The image is `img_size` square, shifted up so that image, text margin
    /// and one line of text are centered together on `position`. The label
    /// sits centered horizontally, `text_margin` below the image.
    fn layout(
        id: Id,
        spec: &NodeSpec,
        position: Point,
        layout: &LayoutConfig,
        label_size: Size,
    ) -> Self {
        let img = layout.img_size();
        let block_height = img + layout.text_margin() + f32::from(layout.font_size());
        let top_left = Point::new(position.x() - img / 2.0, position.y() - block_height / 2.0);
        let image_bounds = Bounds::new_from_top_left(top_left, Size::new(img, img));

        let label_bounds = (!spec.label().is_empty()).then(|| {
            let anchor = Point::new(position.x(), image_bounds.max_y() + layout.text_margin());
            Bounds::new_from_center(anchor, label_size)
        });

        Self {
            id,
            label: spec.label().to_string(),
            image: spec.image().to_string(),
            position,
            image_bounds,
            label_bounds,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// The point the node was laid out around.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn image_bounds(&self) -> Bounds {
        self.image_bounds
    }

    /// Box of the label text, `None` for nodes without a label.
    pub fn label_bounds(&self) -> Option<Bounds> {
        self.label_bounds
    }

    /// Center of the label text.
    pub fn label_anchor(&self) -> Point {
        self.label_bounds.map_or_else(
            || Point::new(self.position.x(), self.image_bounds.max_y()),
            Bounds::center,
        )
    }

    /// Box enclosing the image and the label. Connectors clip against it.
    pub fn bounds(&self) -> Bounds {
        match self.label_bounds {
            Some(label) => self.image_bounds.merge(&label),
            None => self.image_bounds,
        }
    }

    pub(crate) fn translate(&mut self, offset: Point) {
        self.position = self.position.add_point(offset);
        self.image_bounds = self.image_bounds.translate(offset);
        self.label_bounds = self.label_bounds.map(|label| label.translate(offset));
    }

    pub(crate) fn move_to(&mut self, position: Point) {
        self.translate(position.sub_point(self.position));
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, text: &TextDefinition) {
        surface.draw_image(&self.image, self.image_bounds);
        if self.label_bounds.is_some() {
            surface.draw_text(text, &self.label, self.label_anchor());
        }
    }
}

/// The connector between the central node and one satellite.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    from: Id,
    to: Id,
    label: String,
    segment: Segment,
    warning: Option<GeometryWarning>,
}

impl Connection {
    /// Id of the central node.
    pub fn from(&self) -> Id {
        self.from
    }

    /// Id of the satellite.
    pub fn to(&self) -> Id {
        self.to
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The last computed segment.
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// Where the connection label is drawn.
    pub fn label_anchor(&self) -> Point {
        self.segment.midpoint()
    }

    /// Set when the last computation could not clip the boxes.
    pub fn warning(&self) -> Option<GeometryWarning> {
        self.warning
    }
}

/// Creates the connection from `from` to `to`, clipped `margin` away from
/// both nodes.
pub fn create_connection(
    from: &Node,
    to: &Node,
    label: impl Into<String>,
    margin: f32,
) -> Connection {
    let route = connect(from.bounds(), to.bounds(), margin);
    Connection {
        from: from.id(),
        to: to.id(),
        label: label.into(),
        segment: route.segment(),
        warning: route.warning(),
    }
}

/// Recomputes `connection` in place for the given node boxes.
pub fn refresh_connection(connection: &mut Connection, from: Bounds, to: Bounds, margin: f32) {
    let route = connect(from, to, margin);
    connection.segment = route.segment();
    connection.warning = route.warning();
}

/// Styles used by [`Diagram::draw`].
#[derive(Debug, Clone)]
pub struct DrawStyle {
    pub node_text: TextDefinition,
    pub connector_text: TextDefinition,
    pub connector_stroke: StrokeDefinition,
}

/// A laid-out hub-and-spoke diagram.
///
/// Satellite `i` always owns connection `i`.
#[derive(Debug, Clone)]
pub struct Diagram {
    layout: LayoutConfig,
    central: Node,
    satellites: IndexMap<Id, Node>,
    connections: Vec<Connection>,
    visual_offset: Point,
}

impl Diagram {
    /// Builds a diagram on a canvas of size `canvas`.
    ///
    /// Satellites rejected by `hooks` are dropped before placement, so the
    /// accepted ones share the full circle. Labels are measured through
    /// `surface` with `label_text`.
    ///
    /// # Errors
    ///
    /// Returns [`RadiantError::Configuration`] if `layout` is invalid, the
    /// canvas is empty or not finite, the derived radius is not positive,
    /// the hooks reject the central node or two nodes share an id.
    pub fn build<H, S>(
        spec: &DiagramSpec,
        canvas: Size,
        layout: &LayoutConfig,
        label_text: &TextDefinition,
        hooks: &mut H,
        surface: &S,
    ) -> Result<Self, RadiantError>
    where
        H: DiagramHooks + ?Sized,
        S: Surface + ?Sized,
    {
        layout.validate()?;
        if canvas.is_empty() || !canvas.width().is_finite() || !canvas.height().is_finite() {
            return Err(RadiantError::Configuration(format!(
                "canvas must have a positive finite size, got {}x{}",
                canvas.width(),
                canvas.height()
            )));
        }

        let radius = radius_for_canvas(canvas, layout);
        if !radius.is_finite() || radius <= 0.0 {
            return Err(RadiantError::Configuration(format!(
                "canvas {}x{} is too small for {}px nodes (radius {radius})",
                canvas.width(),
                canvas.height(),
                layout.img_size()
            )));
        }

        let central_spec = hooks
            .before_add_node(spec.central().clone())
            .ok_or_else(|| RadiantError::Configuration("central node was rejected".to_string()))?;
        let central_id = central_spec.id().unwrap_or_else(|| Id::new("central"));

        let connected: Vec<_> = spec
            .satellites()
            .iter()
            .enumerate()
            .filter_map(|(idx, satellite)| {
                let accepted = hooks.before_add_connection(satellite.clone());
                if accepted.is_none() {
                    warn!(index = idx; "Connection rejected by hooks");
                }
                accepted.map(|satellite| (idx, satellite))
            })
            .collect();

        let mut accepted = Vec::with_capacity(connected.len());
        for (idx, satellite) in connected {
            let Some(satellite) = hooks.before_add_node(satellite) else {
                warn!(index = idx; "Satellite rejected by hooks");
                continue;
            };
            let id = satellite.id().unwrap_or_else(|| Id::from_anonymous(idx));
            if id == central_id || accepted.iter().any(|(other, _)| *other == id) {
                return Err(RadiantError::Configuration(format!(
                    "duplicate node id `{id}`"
                )));
            }
            accepted.push((id, satellite));
        }

        let canvas_center = Point::new(canvas.width() / 2.0, canvas.height() / 2.0);
        let label_size = surface.measure_text(label_text, central_spec.label());
        let central = Node::layout(central_id, &central_spec, canvas_center, layout, label_size);

        let hub = central.bounds().center();
        let positions = place(hub, radius, accepted.len(), layout.start_angle());
        debug!(radius, satellites = accepted.len(); "Placed satellites");

        let margin = layout.connector_margin();
        let mut satellites = IndexMap::with_capacity(accepted.len());
        let mut connections = Vec::with_capacity(accepted.len());
        for ((id, satellite), position) in accepted.into_iter().zip(positions) {
            let label_size = surface.measure_text(label_text, satellite.label());
            let node = Node::layout(id, &satellite, position, layout, label_size);
            connections.push(create_connection(
                &central,
                &node,
                satellite.connect_label().unwrap_or_default(),
                margin,
            ));
            satellites.insert(id, node);
        }

        let diagram = Self {
            layout: layout.clone(),
            central,
            satellites,
            connections,
            visual_offset: Point::default(),
        };
        info!(
            central = diagram.central.id().to_string(),
            satellites = diagram.satellites.len(),
            warnings = diagram.warnings().count();
            "Diagram built"
        );
        Ok(diagram)
    }

    pub fn central(&self) -> &Node {
        &self.central
    }

    /// Satellites in insertion order.
    pub fn satellites(&self) -> impl ExactSizeIterator<Item = &Node> {
        self.satellites.values()
    }

    /// Connections in satellite order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Every node, central first.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        std::iter::once(&self.central).chain(self.satellites.values())
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        std::iter::once(&mut self.central).chain(self.satellites.values_mut())
    }

    /// Looks up a node by id.
    pub fn node(&self, id: Id) -> Option<&Node> {
        if self.central.id() == id {
            Some(&self.central)
        } else {
            self.satellites.get(&id)
        }
    }

    /// Whether `id` names a satellite.
    pub fn is_satellite(&self, id: Id) -> bool {
        self.satellites.contains_key(&id)
    }

    /// Connections whose last computation fell back to the center line.
    pub fn warnings(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(|c| c.warning().is_some())
    }

    /// The layout configuration captured at build time.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Visual-only translation of node content during a drag gesture.
    pub fn visual_offset(&self) -> Point {
        self.visual_offset
    }

    pub(crate) fn set_visual_offset(&mut self, offset: Point) {
        self.visual_offset = offset;
    }

    /// Moves every node by `(dx, dy)` and recomputes all connections.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        let offset = Point::new(dx, dy);
        for node in self.nodes_mut() {
            node.translate(offset);
        }
        self.refresh_connections();
    }

    /// Recomputes every connection from the current node positions.
    pub fn refresh_connections(&mut self) {
        self.refresh_connections_with_offset(Point::default());
    }

    /// Recomputes every connection as if all nodes were moved by `offset`,
    /// leaving the nodes where they are.
    pub fn refresh_connections_with_offset(&mut self, offset: Point) {
        let margin = self.layout.connector_margin();
        let hub = self.central.bounds().translate(offset);
        for (connection, satellite) in self.connections.iter_mut().zip(self.satellites.values()) {
            refresh_connection(connection, hub, satellite.bounds().translate(offset), margin);
        }
    }

    /// Draws connectors first, then nodes, then connector labels.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, style: &DrawStyle) {
        surface.set_offset(self.visual_offset);
        for connection in &self.connections {
            surface.draw_line(connection.segment(), &style.connector_stroke);
        }
        for node in self.nodes() {
            node.draw(surface, &style.node_text);
        }
        for connection in &self.connections {
            if !connection.label().is_empty() {
                surface.draw_label(
                    &style.connector_text,
                    connection.label(),
                    connection.label_anchor(),
                );
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use float_cmp::assert_approx_eq;

    use crate::hooks::NoHooks;

    use super::*;

    /// Surface that measures every label as a fixed box and records calls.
    #[derive(Debug, Default)]
    pub(crate) struct FixedSurface {
        pub lines: Vec<Segment>,
        pub images: Vec<Bounds>,
        pub texts: Vec<String>,
        pub labels: Vec<String>,
        pub offset: Point,
    }

    impl Surface for FixedSurface {
        fn measure_text(&self, _definition: &TextDefinition, text: &str) -> Size {
            if text.is_empty() {
                Size::default()
            } else {
                Size::new(40.0, 16.0)
            }
        }

        fn draw_image(&mut self, _href: &str, bounds: Bounds) {
            self.images.push(bounds);
        }

        fn draw_text(&mut self, _definition: &TextDefinition, text: &str, _anchor: Point) {
            self.texts.push(text.to_string());
        }

        fn draw_line(&mut self, segment: Segment, _stroke: &StrokeDefinition) {
            self.lines.push(segment);
        }

        fn draw_label(&mut self, _definition: &TextDefinition, text: &str, _anchor: Point) {
            self.labels.push(text.to_string());
        }

        fn set_offset(&mut self, offset: Point) {
            self.offset = offset;
        }

        fn clear(&mut self) {
            *self = Self::default();
        }
    }

    pub(crate) fn satellites(count: usize) -> Vec<NodeSpec> {
        (0..count)
            .map(|i| NodeSpec::new(format!("S{i}"), "sat.png").with_connect_label(format!("c{i}")))
            .collect()
    }

    pub(crate) fn build(spec: &DiagramSpec, canvas: Size) -> Result<Diagram, RadiantError> {
        Diagram::build(
            spec,
            canvas,
            &LayoutConfig::default(),
            &TextDefinition::new(),
            &mut NoHooks,
            &FixedSurface::default(),
        )
    }

    #[test]
    fn test_node_geometry_without_label() {
        let spec = DiagramSpec::new(NodeSpec::new("", "hub.png"), Vec::new());
        let diagram = build(&spec, Size::new(400.0, 400.0)).unwrap();
        let bounds = diagram.central().bounds();

        // Image top-left = (200 - 32, 200 - (64 + 10 + 14) / 2)
        assert_approx_eq!(f32, bounds.min_x(), 168.0);
        assert_approx_eq!(f32, bounds.min_y(), 156.0);
        assert_approx_eq!(f32, bounds.width(), 64.0);
        assert_approx_eq!(f32, bounds.height(), 64.0);
        assert!(diagram.central().label_bounds().is_none());
    }

    #[test]
    fn test_node_geometry_with_label() {
        let spec = DiagramSpec::new(NodeSpec::new("Hub", "hub.png"), Vec::new());
        let diagram = build(&spec, Size::new(400.0, 400.0)).unwrap();
        let central = diagram.central();

        let label = central.label_bounds().unwrap();
        assert_approx_eq!(f32, label.center().x(), 200.0);
        assert_approx_eq!(f32, label.center().y(), 156.0 + 64.0 + 10.0);
        assert_approx_eq!(f32, central.bounds().max_y(), 230.0 + 8.0);
        assert_approx_eq!(f32, central.bounds().min_x(), 168.0);
    }

    #[test]
    fn test_build_four_satellites_on_square_canvas() {
        let spec = DiagramSpec::new(NodeSpec::new("Hub", "hub.png"), satellites(4));
        let diagram = build(&spec, Size::new(400.0, 400.0)).unwrap();
        let hub = diagram.central().bounds().center();

        let positions: Vec<_> = diagram.satellites().map(Node::position).collect();
        assert_eq!(positions.len(), 4);
        assert_approx_eq!(f32, positions[0].x(), hub.x() + 111.0, epsilon = 1e-3);
        assert_approx_eq!(f32, positions[0].y(), hub.y(), epsilon = 1e-3);
        assert_approx_eq!(f32, positions[2].x(), hub.x() - 111.0, epsilon = 1e-3);
        assert_approx_eq!(f32, positions[2].y(), hub.y(), epsilon = 1e-3);

        assert_eq!(diagram.connections().len(), 4);
        assert_eq!(diagram.warnings().count(), 0);
        for (connection, satellite) in diagram.connections().iter().zip(diagram.satellites()) {
            assert_eq!(connection.from(), diagram.central().id());
            assert_eq!(connection.to(), satellite.id());
        }
    }

    #[test]
    fn test_build_zero_satellites() {
        let spec = DiagramSpec::new(NodeSpec::new("Alone", "hub.png"), Vec::new());
        let diagram = build(&spec, Size::new(400.0, 400.0)).unwrap();
        assert_eq!(diagram.satellites().len(), 0);
        assert!(diagram.connections().is_empty());
        assert_eq!(diagram.nodes().count(), 1);
    }

    #[test]
    fn test_build_empty_canvas_is_configuration_error() {
        let spec = DiagramSpec::new(NodeSpec::new("Hub", "hub.png"), satellites(2));
        let err = build(&spec, Size::new(0.0, 400.0)).unwrap_err();
        assert!(matches!(err, RadiantError::Configuration(_)));
    }

    #[test]
    fn test_build_tiny_canvas_is_configuration_error() {
        let spec = DiagramSpec::new(NodeSpec::new("Hub", "hub.png"), satellites(2));
        let err = build(&spec, Size::new(100.0, 100.0)).unwrap_err();
        assert!(err.to_string().contains("too small"));
    }

    #[test]
    fn test_build_non_finite_canvas_is_configuration_error() {
        let spec = DiagramSpec::new(NodeSpec::new("Hub", "hub.png"), satellites(4));
        let canvases = [
            Size::new(f32::NAN, 400.0),
            Size::new(400.0, f32::NAN),
            Size::new(f32::INFINITY, 400.0),
            Size::new(400.0, f32::INFINITY),
        ];
        for canvas in canvases {
            let err = build(&spec, canvas).unwrap_err();
            assert!(matches!(err, RadiantError::Configuration(_)), "{canvas:?}");
        }
    }

    #[test]
    fn test_build_rejects_invalid_layout() {
        let spec = DiagramSpec::new(NodeSpec::new("Hub", "hub.png"), satellites(4));
        for layout in [
            LayoutConfig::default().with_connector_margin(-200.0),
            LayoutConfig::default().with_img_size(f32::NAN),
            LayoutConfig::default().with_start_angle(f32::INFINITY),
        ] {
            let result = Diagram::build(
                &spec,
                Size::new(400.0, 400.0),
                &layout,
                &TextDefinition::new(),
                &mut NoHooks,
                &FixedSurface::default(),
            );
            assert!(matches!(result, Err(RadiantError::Configuration(_))));
        }
    }

    /// Records the order in which hooks fire.
    #[derive(Default)]
    struct HookLog(Vec<String>);

    impl DiagramHooks for HookLog {
        fn before_add_node(&mut self, spec: NodeSpec) -> Option<NodeSpec> {
            self.0.push(format!("node:{}", spec.label()));
            Some(spec)
        }

        fn before_add_connection(&mut self, spec: NodeSpec) -> Option<NodeSpec> {
            self.0.push(format!("conn:{}", spec.label()));
            Some(spec)
        }
    }

    #[test]
    fn test_connection_hooks_run_before_satellite_node_hooks() {
        let spec = DiagramSpec::new(NodeSpec::new("Hub", "hub.png"), satellites(2));
        let mut hooks = HookLog::default();
        Diagram::build(
            &spec,
            Size::new(400.0, 400.0),
            &LayoutConfig::default(),
            &TextDefinition::new(),
            &mut hooks,
            &FixedSurface::default(),
        )
        .unwrap();

        assert_eq!(
            hooks.0,
            ["node:Hub", "conn:S0", "conn:S1", "node:S0", "node:S1"]
        );
    }

    #[test]
    fn test_build_duplicate_ids_rejected() {
        let sats = vec![
            NodeSpec::new("A", "a.png").with_id("dup"),
            NodeSpec::new("B", "b.png").with_id("dup"),
        ];
        let spec = DiagramSpec::new(NodeSpec::new("Hub", "hub.png"), sats);
        let err = build(&spec, Size::new(400.0, 400.0)).unwrap_err();
        assert!(err.to_string().contains("dup"));
    }

    #[test]
    fn test_anonymous_ids_are_positional() {
        let spec = DiagramSpec::new(NodeSpec::new("Hub", "hub.png").with_id("hub"), satellites(2));
        let diagram = build(&spec, Size::new(400.0, 400.0)).unwrap();
        let ids: Vec<_> = diagram.satellites().map(|n| n.id().to_string()).collect();
        assert_eq!(ids, ["__0", "__1"]);
        assert!(diagram.node(Id::new("hub")).is_some());
        assert!(diagram.node(Id::new("__1")).is_some());
        assert!(diagram.node(Id::new("missing")).is_none());
    }

    #[test]
    fn test_translate_round_trip_restores_bounds() {
        let spec = DiagramSpec::new(NodeSpec::new("Hub", "hub.png"), satellites(5));
        let mut diagram = build(&spec, Size::new(500.0, 500.0)).unwrap();
        let before: Vec<_> = diagram.nodes().map(Node::bounds).collect();
        let segments: Vec<_> = diagram.connections().iter().map(Connection::segment).collect();

        diagram.translate(37.5, -12.25);
        diagram.translate(-37.5, 12.25);

        for (node, original) in diagram.nodes().zip(&before) {
            assert_approx_eq!(f32, node.bounds().min_x(), original.min_x(), epsilon = 1e-3);
            assert_approx_eq!(f32, node.bounds().min_y(), original.min_y(), epsilon = 1e-3);
            assert_approx_eq!(f32, node.bounds().max_x(), original.max_x(), epsilon = 1e-3);
            assert_approx_eq!(f32, node.bounds().max_y(), original.max_y(), epsilon = 1e-3);
        }
        for (connection, original) in diagram.connections().iter().zip(&segments) {
            assert_approx_eq!(f32, connection.segment().start().x(), original.start().x(), epsilon = 1e-3);
            assert_approx_eq!(f32, connection.segment().end().y(), original.end().y(), epsilon = 1e-3);
        }
    }

    #[test]
    fn test_translate_moves_connections_rigidly() {
        let spec = DiagramSpec::new(NodeSpec::new("Hub", "hub.png"), satellites(3));
        let mut diagram = build(&spec, Size::new(400.0, 400.0)).unwrap();
        let before = diagram.connections()[0].segment();

        diagram.translate(10.0, 20.0);

        let after = diagram.connections()[0].segment();
        assert_approx_eq!(f32, after.start().x(), before.start().x() + 10.0, epsilon = 1e-3);
        assert_approx_eq!(f32, after.start().y(), before.start().y() + 20.0, epsilon = 1e-3);
        assert_approx_eq!(f32, after.end().x(), before.end().x() + 10.0, epsilon = 1e-3);
    }

    #[test]
    fn test_refresh_with_offset_does_not_move_nodes() {
        let spec = DiagramSpec::new(NodeSpec::new("Hub", "hub.png"), satellites(2));
        let mut diagram = build(&spec, Size::new(400.0, 400.0)).unwrap();
        let hub = diagram.central().bounds();
        let before = diagram.connections()[1].segment();

        diagram.refresh_connections_with_offset(Point::new(5.0, 5.0));

        assert_eq!(diagram.central().bounds(), hub);
        let after = diagram.connections()[1].segment();
        assert_approx_eq!(f32, after.end().x(), before.end().x() + 5.0, epsilon = 1e-3);
    }

    #[test]
    fn test_create_connection_clips_between_nodes() {
        let spec = DiagramSpec::new(NodeSpec::new("", "hub.png"), satellites(1));
        let diagram = build(&spec, Size::new(400.0, 400.0)).unwrap();
        let central = diagram.central();
        let satellite = diagram.satellites().next().unwrap();

        let connection = create_connection(central, satellite, "link", 5.0);
        assert_eq!(connection.label(), "link");
        assert_approx_eq!(f32, connection.segment().start().x(), central.bounds().max_x() + 5.0);
        assert_approx_eq!(f32, connection.segment().end().x(), satellite.bounds().min_x() - 5.0);
        assert!(connection.warning().is_none());
    }

    #[test]
    fn test_refresh_connection_records_ambiguity() {
        let spec = DiagramSpec::new(NodeSpec::new("", "hub.png"), satellites(1));
        let diagram = build(&spec, Size::new(400.0, 400.0)).unwrap();
        let mut connection = diagram.connections()[0].clone();
        let hub = diagram.central().bounds();

        // Overlapping boxes cannot be clipped
        refresh_connection(&mut connection, hub, hub.translate(Point::new(3.0, 3.0)), 5.0);
        assert!(connection.warning().is_some());
        assert_approx_eq!(f32, connection.segment().length(), 18f32.sqrt(), epsilon = 1e-3);
    }

    #[test]
    fn test_draw_emits_primitives_in_order() {
        let spec = DiagramSpec::new(NodeSpec::new("Hub", "hub.png"), satellites(3));
        let diagram = build(&spec, Size::new(400.0, 400.0)).unwrap();
        let style = DrawStyle {
            node_text: TextDefinition::new(),
            connector_text: TextDefinition::new(),
            connector_stroke: StrokeDefinition::default(),
        };

        let mut surface = FixedSurface::default();
        diagram.draw(&mut surface, &style);

        assert_eq!(surface.lines.len(), 3);
        assert_eq!(surface.images.len(), 4);
        assert_eq!(surface.texts, ["Hub", "S0", "S1", "S2"]);
        assert_eq!(surface.labels, ["c0", "c1", "c2"]);
    }
}
