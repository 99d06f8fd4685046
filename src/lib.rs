//! Concept Atlas - layout engine for knowledge maps
//!
//! A knowledge map is a set of labeled nodes grouped into named territories
//! and connected by typed edges. This library computes 2D coordinates for
//! such maps: cycle-safe hierarchical depth on the vertical axis, grouped
//! deterministic placement on the horizontal axis, territory boxes packed
//! on a canvas grid with guaranteed card containment, and per-pointer-move
//! drag clamping for manual edits. Rendering, text generation, and
//! persistence live outside this crate; it consumes and returns plain
//! node/edge/territory collections.
//!
//! # Example
//!
//! ```rust
//! use concept_atlas::{layout_map, Edge, EdgeType, KnowledgeMap, LayoutConfig, Node};
//!
//! let mut map = KnowledgeMap::default();
//! map.nodes.push(Node::new("rust", "Rust"));
//! map.nodes.push(Node::new("ownership", "Ownership"));
//! map.edges
//!     .push(Edge::new("e1", "rust", "ownership").with_type(EdgeType::Dependency));
//!
//! layout_map(&mut map, &LayoutConfig::default()).unwrap();
//! assert!(map.nodes[1].y > map.nodes[0].y);
//! ```

pub mod error;
pub mod layout;
pub mod model;
pub mod profile;

pub use error::AtlasError;
pub use layout::{
    clamp_drag, compute_x, detect_keying, owning_territory, pack_territories, place_nodes,
    place_with_depths, BoundingBox, ClampEvent, DepthResolver, DragSession, DragUpdate,
    GroupKeying, LayoutConfig, LayoutError, LayoutReport, Point,
};
pub use model::{
    Edge, EdgeType, GeneratedMap, KnowledgeMap, Node, NodeType, Territory, TerritoryDraft,
};
pub use profile::{LayoutProfile, ProfileError};

use std::collections::HashMap;

/// Lay out an existing map in place: depth tiers on Y, grouped placement
/// on X.
///
/// If depth resolution trips the traversal guard the map is flattened onto
/// a single tier instead of failing, with a warning — pathological input
/// should degrade, not crash the canvas.
pub fn layout_map(map: &mut KnowledgeMap, config: &LayoutConfig) -> Result<(), AtlasError> {
    match layout::place_nodes(&mut map.nodes, &map.edges, config) {
        Ok(()) => Ok(()),
        Err(err @ LayoutError::GraphTooDeep { .. }) => {
            tracing::warn!(%err, "depth resolution gave up, flattening to one tier");
            layout::place_with_depths(&mut map.nodes, &HashMap::new(), config);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Turn a freshly generated map (territories as name + membership only)
/// into a placed [`KnowledgeMap`]: territories get ids and geometry, member
/// nodes land on grid slots inside them, orphans scatter into the fallback
/// region.
pub fn layout_generated(
    map: GeneratedMap,
    config: &LayoutConfig,
) -> Result<(KnowledgeMap, LayoutReport), AtlasError> {
    let GeneratedMap {
        mut nodes,
        edges,
        territories,
        metadata,
    } = map;
    let (territories, report) = layout::pack_territories(territories, &mut nodes, config)?;
    Ok((
        KnowledgeMap {
            nodes,
            edges,
            territories,
            metadata,
        },
        report,
    ))
}
