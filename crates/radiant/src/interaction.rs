//! Drag and click handling.
//!
//! A drag gesture moves the whole diagram. While it is in progress nodes stay
//! where they are and only a visual offset is applied; connectors are
//! recomputed against the offset positions so they follow the pointer. The
//! move is committed to the model when the gesture ends.

use log::{debug, trace};

use radiant_core::{geometry::Point, identifier::Id};

use crate::{diagram::Diagram, hooks::DiagramHooks};

/// Drag gesture state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Node positions at gesture start, central first.
        origins: Vec<Point>,
        /// Total pointer movement since gesture start.
        delta: Point,
    },
}

/// Turns pointer gestures into diagram moves.
#[derive(Debug, Default)]
pub struct InteractionController {
    state: DragState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Starts a gesture. Ignored for diagrams that are not movable.
    ///
    /// Starting while already dragging commits the previous gesture first.
    pub fn on_drag_start(&mut self, diagram: &mut Diagram) {
        if !diagram.layout().movable() {
            debug!("Drag ignored, diagram is not movable");
            return;
        }
        if self.is_dragging() {
            debug!("Drag restarted before end, committing previous gesture");
            self.on_drag_end(diagram);
        }

        let origins = diagram.nodes().map(|node| node.position()).collect();
        diagram.set_visual_offset(Point::default());
        self.state = DragState::Dragging {
            origins,
            delta: Point::default(),
        };
        trace!("Drag started");
    }

    /// Updates the gesture with the total movement `(dx, dy)` since it
    /// started.
    pub fn on_drag_move(&mut self, diagram: &mut Diagram, dx: f32, dy: f32) {
        let DragState::Dragging { delta, .. } = &mut self.state else {
            return;
        };
        *delta = Point::new(dx, dy);
        diagram.set_visual_offset(*delta);
        diagram.refresh_connections_with_offset(*delta);
        trace!(dx, dy; "Drag moved");
    }

    /// Updates the gesture with movement `(ddx, ddy)` since the last update.
    pub fn on_drag_step(&mut self, diagram: &mut Diagram, ddx: f32, ddy: f32) {
        if let DragState::Dragging { delta, .. } = &self.state {
            let total = delta.add_point(Point::new(ddx, ddy));
            self.on_drag_move(diagram, total.x(), total.y());
        }
    }

    /// Commits the gesture: every node moves to its origin plus the delta.
    pub fn on_drag_end(&mut self, diagram: &mut Diagram) {
        let DragState::Dragging { origins, delta } = std::mem::take(&mut self.state) else {
            return;
        };
        for (node, origin) in diagram.nodes_mut().zip(origins) {
            node.move_to(origin.add_point(delta));
        }
        diagram.set_visual_offset(Point::default());
        diagram.refresh_connections();
        debug!(dx = delta.x(), dy = delta.y(); "Drag committed");
    }

    /// Moves the diagram by `(dx, dy)` immediately.
    ///
    /// During a gesture the stored origins move too, so the translation
    /// survives the commit and connectors keep following the drag offset.
    pub fn on_translate(&mut self, diagram: &mut Diagram, dx: f32, dy: f32) {
        diagram.translate(dx, dy);
        if let DragState::Dragging { origins, delta } = &mut self.state {
            let shift = Point::new(dx, dy);
            for origin in origins.iter_mut() {
                *origin = origin.add_point(shift);
            }
            diagram.refresh_connections_with_offset(*delta);
            trace!(dx, dy; "Translated during drag");
        }
    }

    /// Ends an interrupted gesture the same way as [`Self::on_drag_end`].
    pub fn on_drag_cancel(&mut self, diagram: &mut Diagram) {
        self.on_drag_end(diagram);
    }

    /// Forwards a click on satellite `id` to the hooks.
    ///
    /// Returns `false` for the central node and unknown ids.
    pub fn on_click<H: DiagramHooks + ?Sized>(
        &self,
        diagram: &Diagram,
        id: Id,
        hooks: &mut H,
    ) -> bool {
        if !diagram.is_satellite(id) {
            return false;
        }
        match diagram.node(id) {
            Some(node) => {
                hooks.on_node_clicked(node);
                true
            }
            None => false,
        }
    }
}
