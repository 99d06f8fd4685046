//! Horizontal placement of same-tier nodes
//!
//! Once depths are known, each tier is partitioned into ordered groups and
//! laid out left to right: groups never interleave, nodes within a group
//! keep their original array order, and the whole arrangement is a pure
//! function of the tier snapshot, so recomputing any node's X always lands
//! on the same value.

use crate::model::{Node, NodeType};

use super::config::LayoutConfig;

/// How tier groups are keyed for one layout pass.
///
/// Keying is decided once per dataset: territories win whenever any node
/// carries membership information, otherwise nodes cluster by semantic
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKeying {
    /// Group by the node's primary territory; nodes without one share a
    /// catch-all group
    Territory,
    /// Group by node type, with a default bucket for untyped nodes
    NodeType,
}

/// Pick the keying for a dataset: territory keying as soon as a single
/// node carries a territory id.
pub fn detect_keying(nodes: &[Node]) -> GroupKeying {
    if nodes.iter().any(|n| n.territory_id.is_some()) {
        GroupKeying::Territory
    } else {
        GroupKeying::NodeType
    }
}

/// Identity of a tier group. Group order is first-encounter order while
/// scanning the tier, never alphabetical.
#[derive(Debug, Clone, PartialEq, Eq)]
enum GroupKey<'a> {
    Territory(&'a str),
    NoTerritory,
    Type(Option<NodeType>),
}

fn group_key<'a>(node: &'a Node, keying: GroupKeying) -> GroupKey<'a> {
    match keying {
        GroupKeying::Territory => match node.territory_id.as_deref() {
            Some(id) => GroupKey::Territory(id),
            None => GroupKey::NoTerritory,
        },
        GroupKeying::NodeType => GroupKey::Type(node.node_type),
    }
}

/// Compute the X coordinate for `node` given the full snapshot of nodes
/// sharing its tier (the snapshot includes `node` itself).
///
/// `x = start_x + group_index * group_spacing
///            + (nodes_in_earlier_groups + index_in_group) * horizontal_spacing`
///
/// Same-tier nodes therefore always receive pairwise distinct X values,
/// and widening either spacing constant spreads them out without
/// reordering anything.
pub fn compute_x(
    node: &Node,
    tier: &[&Node],
    keying: GroupKeying,
    config: &LayoutConfig,
) -> f64 {
    let mut group_order: Vec<GroupKey> = Vec::new();
    let mut group_counts: Vec<usize> = Vec::new();
    let mut node_slot: Option<(usize, usize)> = None;

    for peer in tier {
        let key = group_key(peer, keying);
        let gi = match group_order.iter().position(|g| *g == key) {
            Some(i) => i,
            None => {
                group_order.push(key);
                group_counts.push(0);
                group_order.len() - 1
            }
        };
        if node_slot.is_none() && peer.id == node.id {
            node_slot = Some((gi, group_counts[gi]));
        }
        group_counts[gi] += 1;
    }

    // A node missing from its own snapshot is placed as if appended.
    let (gi, idx) = match node_slot {
        Some(slot) => slot,
        None => {
            let key = group_key(node, keying);
            match group_order.iter().position(|g| *g == key) {
                Some(i) => (i, group_counts[i]),
                None => (group_order.len(), 0),
            }
        }
    };

    let earlier: usize = group_counts[..gi.min(group_counts.len())].iter().sum();
    config.start_x
        + gi as f64 * config.group_spacing
        + (earlier + idx) as f64 * config.horizontal_spacing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(id: &str, node_type: NodeType) -> Node {
        Node::new(id, id).with_type(node_type)
    }

    #[test]
    fn test_keying_detection() {
        let untyped = vec![Node::new("a", "a"), Node::new("b", "b")];
        assert_eq!(detect_keying(&untyped), GroupKeying::NodeType);

        let mixed = vec![Node::new("a", "a"), Node::new("b", "b").with_territory("t1")];
        assert_eq!(detect_keying(&mixed), GroupKeying::Territory);
    }

    #[test]
    fn test_groups_stay_contiguous() {
        // interleaved input: concept, person, concept, person
        let nodes = vec![
            typed("c1", NodeType::Concept),
            typed("p1", NodeType::Person),
            typed("c2", NodeType::Concept),
            typed("p2", NodeType::Person),
        ];
        let tier: Vec<&Node> = nodes.iter().collect();
        let config = LayoutConfig::default();

        let xs: Vec<f64> = nodes
            .iter()
            .map(|n| compute_x(n, &tier, GroupKeying::NodeType, &config))
            .collect();

        // concepts (first-encountered group) occupy the leftmost slots
        assert!(xs[0] < xs[2]);
        assert!(xs[2] < xs[1]);
        assert!(xs[1] < xs[3]);
    }

    #[test]
    fn test_no_x_collisions_and_determinism() {
        let nodes = vec![
            Node::new("a", "a").with_territory("t1"),
            Node::new("b", "b").with_territory("t2"),
            Node::new("c", "c"),
            Node::new("d", "d").with_territory("t1"),
        ];
        let tier: Vec<&Node> = nodes.iter().collect();
        let config = LayoutConfig::default();

        let xs: Vec<f64> = nodes
            .iter()
            .map(|n| compute_x(n, &tier, GroupKeying::Territory, &config))
            .collect();
        for (i, a) in xs.iter().enumerate() {
            for b in &xs[i + 1..] {
                assert_ne!(a, b, "same-tier nodes must not share an X");
            }
        }

        let again: Vec<f64> = nodes
            .iter()
            .map(|n| compute_x(n, &tier, GroupKeying::Territory, &config))
            .collect();
        assert_eq!(xs, again);
    }

    #[test]
    fn test_first_node_anchored_at_start_x() {
        let nodes = vec![typed("a", NodeType::Event)];
        let tier: Vec<&Node> = nodes.iter().collect();
        let config = LayoutConfig::default();
        assert_eq!(
            compute_x(&nodes[0], &tier, GroupKeying::NodeType, &config),
            config.start_x
        );
    }

    #[test]
    fn test_wider_spacing_preserves_order() {
        let nodes = vec![
            typed("a", NodeType::Concept),
            typed("b", NodeType::Person),
            typed("c", NodeType::Concept),
        ];
        let tier: Vec<&Node> = nodes.iter().collect();
        let narrow = LayoutConfig::default();
        let wide = LayoutConfig::default()
            .with_horizontal_spacing(400.0)
            .with_group_spacing(300.0);

        let order = |config: &LayoutConfig| {
            let mut ranked: Vec<(&str, f64)> = nodes
                .iter()
                .map(|n| {
                    (
                        n.id.as_str(),
                        compute_x(n, &tier, GroupKeying::NodeType, config),
                    )
                })
                .collect();
            ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
            ranked.into_iter().map(|(id, _)| id).collect::<Vec<_>>()
        };

        assert_eq!(order(&narrow), order(&wide));
    }
}
