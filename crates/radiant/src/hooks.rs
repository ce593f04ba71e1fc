//! Host callbacks invoked while a diagram is built and used.

use crate::diagram::{Node, NodeSpec};

/// Callbacks a host can install to veto or rewrite nodes and to react to
/// clicks.
///
/// Every method has a default that accepts the input unchanged, so hosts
/// implement only what they need.
///
/// During a build the central node goes through [`before_add_node`] first.
/// Then every satellite goes through [`before_add_connection`], in input
/// order, and only after that do the survivors go through
/// [`before_add_node`].
///
/// [`before_add_node`]: DiagramHooks::before_add_node
/// [`before_add_connection`]: DiagramHooks::before_add_connection
///
/// # Examples
///
/// ```
/// use radiant::{DiagramHooks, NodeSpec};
///
/// /// Drops satellites without an image.
/// struct RequireImages;
///
/// impl DiagramHooks for RequireImages {
///     fn before_add_connection(&mut self, spec: NodeSpec) -> Option<NodeSpec> {
///         (!spec.image().is_empty()).then_some(spec)
///     }
/// }
/// ```
pub trait DiagramHooks {
    /// Called for the central node and every satellite before it is laid
    /// out. Returning `None` drops a satellite; dropping the central node
    /// fails the build.
    fn before_add_node(&mut self, spec: NodeSpec) -> Option<NodeSpec> {
        Some(spec)
    }

    /// Called for every satellite before its connection to the hub is
    /// created. Returning `None` drops the satellite and its connection.
    fn before_add_connection(&mut self, spec: NodeSpec) -> Option<NodeSpec> {
        Some(spec)
    }

    /// Called when a satellite is clicked.
    fn on_node_clicked(&mut self, _node: &Node) {}
}

/// Hooks that accept everything and ignore clicks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl DiagramHooks for NoHooks {}
