//! Layout engine for knowledge maps
//!
//! Two placement paths share this module. The unconstrained path
//! ([`place_nodes`]) resolves a hierarchical depth per node and spreads
//! each tier horizontally by group. The territory-constrained path
//! ([`pack_territories`]) sizes territory boxes and assigns both
//! coordinates from grid slots inside them. [`clamp_drag`] and
//! [`DragSession`] cover manual repositioning between batch passes.

pub mod config;
pub mod depth;
pub mod drag;
pub mod error;
pub mod group;
pub mod territory;
pub mod types;

pub use config::LayoutConfig;
pub use depth::DepthResolver;
pub use drag::{clamp_drag, owning_territory, DragSession, DragUpdate};
pub use error::LayoutError;
pub use group::{compute_x, detect_keying, GroupKeying};
pub use territory::pack_territories;
pub use types::{BoundingBox, ClampEvent, LayoutReport, Point};

use std::collections::HashMap;

use crate::model::{Edge, Node};

/// Resolve depths and assign coordinates to every node.
///
/// Y comes from the node's depth tier, X from grouped placement within the
/// tier. Mutates the nodes in place. Dangling edge references are skipped;
/// the only error is [`LayoutError::GraphTooDeep`], after which callers
/// may recover via [`place_with_depths`] and an empty depth map.
pub fn place_nodes(
    nodes: &mut [Node],
    edges: &[Edge],
    config: &LayoutConfig,
) -> Result<(), LayoutError> {
    config.validate()?;
    let depths = DepthResolver::new(nodes, edges, config).resolve()?;
    place_with_depths(nodes, &depths, config);
    Ok(())
}

/// Assign coordinates from precomputed depths. Nodes missing from the map
/// count as roots, so an empty map flattens the whole graph onto tier 0 —
/// the documented fallback when depth resolution gives up.
pub fn place_with_depths(
    nodes: &mut [Node],
    depths: &HashMap<String, u32>,
    config: &LayoutConfig,
) {
    let keying = detect_keying(nodes);

    let depth_of = |node: &Node| depths.get(&node.id).copied().unwrap_or(0);

    let mut tiers: HashMap<u32, Vec<&Node>> = HashMap::new();
    for node in nodes.iter() {
        tiers.entry(depth_of(node)).or_default().push(node);
    }

    let placements: Vec<(f64, f64)> = nodes
        .iter()
        .map(|node| {
            let depth = depth_of(node);
            let tier = &tiers[&depth];
            let x = compute_x(node, tier, keying, config);
            let y = config.start_y + f64::from(depth) * config.tier_spacing;
            (x, y)
        })
        .collect();

    for (node, (x, y)) in nodes.iter_mut().zip(placements) {
        node.x = x;
        node.y = y;
    }
}
