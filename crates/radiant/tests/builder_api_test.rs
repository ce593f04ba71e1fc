//! Integration tests for the DiagramBuilder and Canvas API

use float_cmp::assert_approx_eq;

use radiant::{
    DiagramBuilder, DiagramHooks, DiagramSpec, Node, NodeSpec, RadiantError,
    config::{AppConfig, LayoutConfig, StyleConfig},
    geometry::Size,
    identifier::Id,
};

fn services(count: usize) -> DiagramSpec {
    let satellites = (0..count)
        .map(|i| {
            NodeSpec::new(format!("Service {i}"), format!("img/service{i}.png"))
                .with_id(&format!("svc{i}"))
                .with_connect_label(format!("call {i}"))
        })
        .collect();
    DiagramSpec::new(NodeSpec::new("Gateway", "img/gateway.png").with_id("gateway"), satellites)
}

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_build_and_render_simple_diagram() {
    let builder = DiagramBuilder::default();
    let mut canvas = builder
        .build(&services(3), Size::new(400.0, 400.0))
        .expect("Failed to build diagram");

    let svg = canvas.render_svg();
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert_eq!(svg.matches("<line").count(), 3);
    assert_eq!(svg.matches("<image").count(), 4);
    // One shared background filter for all connector labels
    assert_eq!(svg.matches("<filter").count(), 1);
}

#[test]
fn test_satellites_surround_the_hub() {
    let canvas = DiagramBuilder::default()
        .build(&services(4), Size::new(400.0, 400.0))
        .unwrap();
    let diagram = canvas.diagram().unwrap();
    let hub = diagram.central().bounds().center();

    let positions: Vec<_> = diagram.satellites().map(Node::position).collect();
    assert_approx_eq!(f32, positions[0].x(), hub.x() + 111.0, epsilon = 1e-3);
    assert_approx_eq!(f32, positions[0].y(), hub.y(), epsilon = 1e-3);
    assert_approx_eq!(f32, positions[2].x(), hub.x() - 111.0, epsilon = 1e-3);
    assert_approx_eq!(f32, positions[2].y(), hub.y(), epsilon = 1e-3);
}

#[test]
fn test_drag_moves_whole_diagram() {
    let mut canvas = DiagramBuilder::default()
        .build(&services(2), Size::new(400.0, 400.0))
        .unwrap();
    let before: Vec<_> = canvas.diagram().unwrap().nodes().map(Node::position).collect();

    canvas.drag_start();
    canvas.drag_move(30.0, -10.0);
    let mid_drag = canvas.render_svg();
    assert!(mid_drag.contains("translate(30 -10)"));
    canvas.drag_end();

    assert!(!canvas.is_dragging());
    let after: Vec<_> = canvas.diagram().unwrap().nodes().map(Node::position).collect();
    for (old, new) in before.iter().zip(&after) {
        assert_approx_eq!(f32, new.x(), old.x() + 30.0, epsilon = 1e-3);
        assert_approx_eq!(f32, new.y(), old.y() - 10.0, epsilon = 1e-3);
    }
    assert!(!canvas.render_svg().contains("translate("));
}

#[test]
fn test_not_movable_config_ignores_drag() {
    let config = AppConfig::new(
        LayoutConfig::default().with_movable(false),
        StyleConfig::default(),
    );
    let mut canvas = DiagramBuilder::new(config)
        .build(&services(2), Size::new(400.0, 400.0))
        .unwrap();
    let before = canvas.diagram().unwrap().central().bounds();

    canvas.drag_start();
    canvas.drag_move(50.0, 50.0);
    canvas.drag_end();

    assert_eq!(canvas.diagram().unwrap().central().bounds(), before);
}

struct SkipOdd {
    seen: usize,
}

impl DiagramHooks for SkipOdd {
    fn before_add_connection(&mut self, spec: NodeSpec) -> Option<NodeSpec> {
        self.seen += 1;
        (self.seen % 2 == 1).then_some(spec)
    }
}

#[test]
fn test_rejected_satellites_free_their_slots() {
    let mut hooks = SkipOdd { seen: 0 };
    let canvas = DiagramBuilder::default()
        .build_with_hooks(&services(4), Size::new(400.0, 400.0), &mut hooks)
        .unwrap();
    let diagram = canvas.diagram().unwrap();

    let ids: Vec<_> = diagram.satellites().map(|n| n.id().to_string()).collect();
    assert_eq!(ids, ["svc0", "svc2"]);
    assert_eq!(diagram.connections().len(), 2);

    // Two accepted satellites sit on opposite sides of the hub
    let hub = diagram.central().bounds().center();
    let positions: Vec<_> = diagram.satellites().map(Node::position).collect();
    assert_approx_eq!(f32, positions[1].x(), hub.x() - 111.0, epsilon = 1e-3);
}

struct RejectAll;

impl DiagramHooks for RejectAll {
    fn before_add_node(&mut self, _spec: NodeSpec) -> Option<NodeSpec> {
        None
    }
}

#[test]
fn test_rejecting_central_node_fails() {
    let result = DiagramBuilder::default().build_with_hooks(
        &services(1),
        Size::new(400.0, 400.0),
        &mut RejectAll,
    );
    assert!(matches!(result, Err(RadiantError::Configuration(_))));
}

#[test]
fn test_zero_size_canvas_fails() {
    let result = DiagramBuilder::default().build(&services(1), Size::new(0.0, 0.0));
    assert!(matches!(result, Err(RadiantError::Configuration(_))));
}

#[test]
fn test_non_finite_canvas_fails() {
    for size in [Size::new(f32::NAN, 400.0), Size::new(f32::INFINITY, 400.0)] {
        let result = DiagramBuilder::default().build(&services(4), size);
        assert!(matches!(result, Err(RadiantError::Configuration(_))));
    }
}

#[test]
fn test_negative_connector_margin_fails() {
    let config = AppConfig::new(
        LayoutConfig::default().with_connector_margin(-200.0),
        StyleConfig::default(),
    );
    let result = DiagramBuilder::new(config).build(&services(4), Size::new(400.0, 400.0));
    assert!(matches!(result, Err(RadiantError::Configuration(_))));
}

#[test]
fn test_translate_during_drag_is_committed() {
    let mut canvas = DiagramBuilder::default()
        .build(&services(2), Size::new(400.0, 400.0))
        .unwrap();
    let before: Vec<_> = canvas.diagram().unwrap().nodes().map(Node::position).collect();

    canvas.drag_start();
    canvas.drag_move(30.0, 0.0);
    canvas.translate(10.0, 0.0);
    canvas.drag_end();

    let after: Vec<_> = canvas.diagram().unwrap().nodes().map(Node::position).collect();
    for (old, new) in before.iter().zip(&after) {
        assert_approx_eq!(f32, new.x(), old.x() + 40.0, epsilon = 1e-3);
        assert_approx_eq!(f32, new.y(), old.y(), epsilon = 1e-3);
    }
}

#[test]
fn test_invalid_style_fails() {
    let style = parse_style("line_color = \"nope\"");
    let config = AppConfig::new(LayoutConfig::default(), style);
    let result = DiagramBuilder::new(config).build(&services(1), Size::new(400.0, 400.0));
    assert!(matches!(result, Err(RadiantError::Configuration(_))));
}

fn parse_style(source: &str) -> StyleConfig {
    toml::from_str(source).expect("valid TOML")
}

#[derive(Default)]
struct Clicks(Vec<Id>);

impl DiagramHooks for Clicks {
    fn on_node_clicked(&mut self, node: &Node) {
        self.0.push(node.id());
    }
}

#[test]
fn test_click_forwards_to_hooks() {
    let canvas = DiagramBuilder::default()
        .build(&services(2), Size::new(400.0, 400.0))
        .unwrap();
    let mut clicks = Clicks::default();

    assert!(canvas.click(Id::new("svc1"), &mut clicks));
    assert!(!canvas.click(Id::new("gateway"), &mut clicks));
    assert_eq!(clicks.0, [Id::new("svc1")]);
}

#[test]
fn test_teardown_is_idempotent() {
    let mut canvas = DiagramBuilder::default()
        .build(&services(2), Size::new(400.0, 400.0))
        .unwrap();
    canvas.render_svg();

    canvas.teardown();
    canvas.teardown();

    assert!(canvas.diagram().is_none());
    canvas.drag_start();
    canvas.drag_move(5.0, 5.0);
    let svg = canvas.render_svg();
    assert!(svg.contains("<svg"));
    assert!(!svg.contains("<image"));
    assert!(!svg.contains("<filter"));
}

#[test]
fn test_write_svg_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diagram.svg");
    let mut canvas = DiagramBuilder::default()
        .build(&services(2), Size::new(400.0, 400.0))
        .unwrap();

    canvas.write_svg(&path).expect("Failed to write SVG");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("<svg"));
}
