//! Interaction-time drag clamping
//!
//! Runs once per pointer-move while a node is being repositioned by hand:
//! the candidate position (pointer minus the grab offset captured at drag
//! start) is clamped into the owning territory's interior so the card can
//! never be dropped outside its container. Nodes without an owning
//! territory move freely. Lookup is a linear scan over territories and the
//! clamp itself is constant-time, cheap enough for pointer-event frequency.

use crate::model::{Node, Territory};

use super::config::LayoutConfig;
use super::territory::clamp_center;
use super::types::Point;

/// First territory (in scan order) whose membership list contains the node
pub fn owning_territory<'a>(node_id: &str, territories: &'a [Territory]) -> Option<&'a Territory> {
    territories.iter().find(|t| t.contains_node(node_id))
}

/// Clamp one drag step. Pure: the committed position is whatever the last
/// call returned when the pointer was released.
pub fn clamp_drag(
    node: &Node,
    territories: &[Territory],
    pointer_world: Point,
    grab_offset: Point,
    config: &LayoutConfig,
) -> Point {
    let target = Point::new(
        pointer_world.x - grab_offset.x,
        pointer_world.y - grab_offset.y,
    );
    match owning_territory(&node.id, territories) {
        Some(territory) => clamp_center(target, territory, config),
        None => target,
    }
}

/// Result of one pointer-move step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    /// Clamped node position to apply
    pub position: Point,
    /// True exactly once per boundary contact; stays false until the node
    /// leaves the boundary again
    pub boundary_hit: bool,
}

/// State for one drag gesture.
///
/// Captures the grab offset (pointer to card center) once at drag start,
/// and suppresses repeated boundary-hit notifications so a pointer pinned
/// against the edge does not flood the caller. Ending the gesture drops
/// the suppression flag unconditionally, whether or not the node still
/// exists.
#[derive(Debug, Clone)]
pub struct DragSession {
    node_id: String,
    grab_offset: Point,
    boundary_notified: bool,
    last_position: Option<Point>,
}

impl DragSession {
    /// Start a gesture with the pointer at `pointer_world` over `node`
    pub fn begin(node: &Node, pointer_world: Point) -> Self {
        Self {
            node_id: node.id.clone(),
            grab_offset: Point::new(pointer_world.x - node.x, pointer_world.y - node.y),
            boundary_notified: false,
            last_position: None,
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Process one pointer move
    pub fn update(
        &mut self,
        pointer_world: Point,
        territories: &[Territory],
        config: &LayoutConfig,
    ) -> DragUpdate {
        let target = Point::new(
            pointer_world.x - self.grab_offset.x,
            pointer_world.y - self.grab_offset.y,
        );
        let position = match owning_territory(&self.node_id, territories) {
            Some(territory) => clamp_center(target, territory, config),
            None => target,
        };

        let at_boundary = position != target;
        let boundary_hit = at_boundary && !self.boundary_notified;
        self.boundary_notified = at_boundary;
        self.last_position = Some(position);

        DragUpdate {
            position,
            boundary_hit,
        }
    }

    /// End the gesture, returning the committed position (if the pointer
    /// ever moved). Consumes the session, so the suppression flag cannot
    /// outlive the drag.
    pub fn finish(self) -> Option<Point> {
        self.last_position
    }
}
