//! Radiant - layout and connector clipping for hub-and-spoke diagrams.
//!
//! A central node is surrounded by satellites placed evenly on a circle and
//! joined to the hub by labelled connectors. Connectors are clipped so they
//! stop short of both node boxes, and re-derived whenever the diagram moves.
//!
//! The usual entry point is [`DiagramBuilder`], which lays out a
//! [`DiagramSpec`] on a canvas and returns a [`Canvas`] that handles drag
//! gestures and renders SVG.

pub mod config;
pub mod export;
pub mod layout;

mod diagram;
mod error;
mod hooks;
mod interaction;

pub use radiant_core::{color, draw, geometry, identifier};

pub use diagram::{
    Connection, Diagram, DiagramSpec, DrawStyle, Node, NodeSpec, create_connection,
    refresh_connection,
};
pub use error::RadiantError;
pub use hooks::{DiagramHooks, NoHooks};
pub use interaction::{DragState, InteractionController};
pub use layout::GeometryWarning;

use std::path::Path;

use log::{debug, info};

use radiant_core::{draw::Surface, geometry::Size, identifier::Id};

use config::AppConfig;
use export::svg::SvgSurface;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder that lays out diagrams with a fixed configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use radiant::{DiagramBuilder, DiagramSpec, NodeSpec, config::AppConfig, geometry::Size};
///
/// let spec = DiagramSpec::new(
///     NodeSpec::new("Gateway", "img/gateway.png"),
///     vec![
///         NodeSpec::new("Auth", "img/auth.png").with_connect_label("tokens"),
///         NodeSpec::new("Orders", "img/orders.png").with_connect_label("REST"),
///     ],
/// );
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let mut canvas = builder
///     .build(&spec, Size::new(400.0, 400.0))
///     .expect("Failed to build");
///
/// canvas.drag_start();
/// canvas.drag_move(20.0, 10.0);
/// canvas.drag_end();
///
/// let svg = canvas.render_svg();
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Lay out `spec` on a canvas of `size` without host hooks.
    ///
    /// # Errors
    ///
    /// Returns [`RadiantError::Configuration`] for an invalid style, an
    /// undersized canvas or duplicate node ids.
    pub fn build(&self, spec: &DiagramSpec, size: Size) -> Result<Canvas, RadiantError> {
        self.build_with_hooks(spec, size, &mut NoHooks)
    }

    /// Lay out `spec` on a canvas of `size`, running `hooks` on every node.
    ///
    /// # Errors
    ///
    /// Same as [`DiagramBuilder::build`], and also when `hooks` reject the
    /// central node.
    pub fn build_with_hooks<H: DiagramHooks + ?Sized>(
        &self,
        spec: &DiagramSpec,
        size: Size,
        hooks: &mut H,
    ) -> Result<Canvas, RadiantError> {
        info!(
            width = size.width(),
            height = size.height(),
            satellites = spec.satellites().len();
            "Building diagram"
        );

        let layout = self.config.layout();
        let style = self.config.style();
        let draw_style = DrawStyle {
            node_text: style.node_text(layout),
            connector_text: style.connector_text(layout)?,
            connector_stroke: style.connector_stroke()?,
        };
        let surface = SvgSurface::new(size, style.background_color()?);

        let diagram = Diagram::build(spec, size, layout, &draw_style.node_text, hooks, &surface)?;
        debug!(nodes = diagram.nodes().count(); "Diagram ready");

        Ok(Canvas {
            diagram: Some(diagram),
            controller: InteractionController::new(),
            surface,
            style: draw_style,
        })
    }
}

/// A built diagram bound to its SVG surface.
///
/// After [`Canvas::teardown`] the diagram is gone: gestures are ignored and
/// renders produce an empty document.
#[derive(Debug)]
pub struct Canvas {
    diagram: Option<Diagram>,
    controller: InteractionController,
    surface: SvgSurface,
    style: DrawStyle,
}

impl Canvas {
    /// The laid-out diagram, `None` after teardown.
    pub fn diagram(&self) -> Option<&Diagram> {
        self.diagram.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn drag_start(&mut self) {
        if let Some(diagram) = self.diagram.as_mut() {
            self.controller.on_drag_start(diagram);
        }
    }

    /// `(dx, dy)` is the total movement since [`Canvas::drag_start`].
    pub fn drag_move(&mut self, dx: f32, dy: f32) {
        if let Some(diagram) = self.diagram.as_mut() {
            self.controller.on_drag_move(diagram, dx, dy);
        }
    }

    pub fn drag_end(&mut self) {
        if let Some(diagram) = self.diagram.as_mut() {
            self.controller.on_drag_end(diagram);
        }
    }

    pub fn drag_cancel(&mut self) {
        if let Some(diagram) = self.diagram.as_mut() {
            self.controller.on_drag_cancel(diagram);
        }
    }

    /// Moves the whole diagram by `(dx, dy)` immediately.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        if let Some(diagram) = self.diagram.as_mut() {
            self.controller.on_translate(diagram, dx, dy);
        }
    }

    /// Reports a click on node `id`. Returns whether `hooks` were notified.
    pub fn click<H: DiagramHooks + ?Sized>(&self, id: Id, hooks: &mut H) -> bool {
        self.diagram
            .as_ref()
            .is_some_and(|diagram| self.controller.on_click(diagram, id, hooks))
    }

    /// Renders the current state, including any in-progress drag offset.
    pub fn render_svg(&mut self) -> String {
        if let Some(diagram) = &self.diagram {
            diagram.draw(&mut self.surface, &self.style);
            debug!(connections = diagram.connections().len(); "Diagram drawn");
        }
        self.surface.take_document().to_string()
    }

    /// Renders the current state to the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RadiantError::Export`] if the file cannot be written.
    pub fn write_svg(&mut self, path: &Path) -> Result<(), RadiantError> {
        if let Some(diagram) = &self.diagram {
            diagram.draw(&mut self.surface, &self.style);
        }
        let doc = self.surface.take_document();
        export::svg::write_document(path, &doc)?;
        Ok(())
    }

    /// Drops the diagram and releases the surface's drawing resources.
    pub fn teardown(&mut self) {
        if self.diagram.take().is_some() {
            info!("Diagram torn down");
        }
        self.controller = InteractionController::new();
        self.surface.clear();
    }
}
