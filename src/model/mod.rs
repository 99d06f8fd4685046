//! Data model for knowledge maps
//!
//! A knowledge map is a flat document: labeled nodes, directed typed edges,
//! and named territory rectangles that each own an explicit list of member
//! nodes. The shapes mirror the JSON produced by the map-generation call
//! (`{ nodes, edges, territories, metadata? }`), so everything here carries
//! serde derives with camelCase wire names.
//!
//! The layout engine borrows these collections for the duration of one pass
//! and writes coordinates back; it never owns or persists them.

use serde::{Deserialize, Serialize};

/// Semantic category of a node, used as the grouping key when no territory
/// information is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Concept,
    Entity,
    Event,
    Location,
    Person,
}

/// Relationship category of an edge. Only `Dependency` and `Hierarchy`
/// participate in depth resolution; the rest are opaque to layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    Relationship,
    Dependency,
    Similarity,
    Hierarchy,
}

impl EdgeType {
    /// Whether this edge kind contributes to hierarchical depth
    pub fn is_hierarchical(self) -> bool {
        matches!(self, EdgeType::Dependency | EdgeType::Hierarchy)
    }
}

/// A single labeled point in the map. Coordinates are the center of the
/// node's card and are assigned by the layout pass (or continuously during
/// a drag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<NodeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub territory_id: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x: 0.0,
            y: 0.0,
            node_type: None,
            territory_id: None,
        }
    }

    /// Set the semantic type
    pub fn with_type(mut self, node_type: NodeType) -> Self {
        self.node_type = Some(node_type);
        self
    }

    /// Set the owning territory id
    pub fn with_territory(mut self, territory_id: impl Into<String>) -> Self {
        self.territory_id = Some(territory_id.into());
        self
    }
}

/// A directed, typed relationship between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub edge_type: Option<EdgeType>,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            edge_type: None,
        }
    }

    /// Set the edge type
    pub fn with_type(mut self, edge_type: EdgeType) -> Self {
        self.edge_type = Some(edge_type);
        self
    }

    /// Whether this edge contributes to depth resolution
    pub fn is_hierarchical(&self) -> bool {
        self.edge_type.is_some_and(EdgeType::is_hierarchical)
    }
}

/// A named rectangular container grouping a subset of nodes.
///
/// Membership is the explicit `node_ids` list; `Node::territory_id` is a
/// denormalized hint that the membership list always wins over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Territory {
    pub id: String,
    #[serde(alias = "label")]
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default)]
    pub node_ids: Vec<String>,
}

impl Territory {
    /// Whether the given node is a member of this territory
    pub fn contains_node(&self, node_id: &str) -> bool {
        self.node_ids.iter().any(|id| id == node_id)
    }
}

/// A territory as it arrives from the generation call: a name and a
/// membership list, before the packer assigns an id and geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerritoryDraft {
    #[serde(alias = "label")]
    pub name: String,
    #[serde(default)]
    pub node_ids: Vec<String>,
}

impl TerritoryDraft {
    pub fn new(name: impl Into<String>, node_ids: Vec<String>) -> Self {
        Self {
            name: name.into(),
            node_ids,
        }
    }
}

/// A fully placed knowledge map document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeMap {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub territories: Vec<Territory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl KnowledgeMap {
    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// First territory (in document order) whose membership list contains
    /// the node. Membership lists win over `Node::territory_id`.
    pub fn owning_territory(&self, node_id: &str) -> Option<&Territory> {
        self.territories.iter().find(|t| t.contains_node(node_id))
    }

    /// Remove a node, cascading removal of every edge touching it and of
    /// any territory membership entries.
    pub fn remove_node(&mut self, node_id: &str) {
        self.nodes.retain(|n| n.id != node_id);
        self.edges
            .retain(|e| e.source != node_id && e.target != node_id);
        for territory in &mut self.territories {
            territory.node_ids.retain(|id| id != node_id);
        }
    }
}

/// The raw shape returned by the map-generation call, before territories
/// have ids or geometry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMap {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub territories: Vec<TerritoryDraft>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_type_participation() {
        assert!(EdgeType::Dependency.is_hierarchical());
        assert!(EdgeType::Hierarchy.is_hierarchical());
        assert!(!EdgeType::Relationship.is_hierarchical());
        assert!(!EdgeType::Similarity.is_hierarchical());

        let untyped = Edge::new("e1", "a", "b");
        assert!(!untyped.is_hierarchical());
    }

    #[test]
    fn test_remove_node_cascades() {
        let mut map = KnowledgeMap {
            nodes: vec![Node::new("a", "A"), Node::new("b", "B")],
            edges: vec![
                Edge::new("e1", "a", "b"),
                Edge::new("e2", "b", "a"),
                Edge::new("e3", "b", "b"),
            ],
            territories: vec![Territory {
                id: "t1".into(),
                name: "T".into(),
                x: 0.0,
                y: 0.0,
                w: 100.0,
                h: 100.0,
                node_ids: vec!["a".into(), "b".into()],
            }],
            metadata: None,
        };

        map.remove_node("a");

        assert_eq!(map.nodes.len(), 1);
        assert_eq!(map.edges.len(), 1);
        assert_eq!(map.edges[0].id, "e3");
        assert_eq!(map.territories[0].node_ids, vec!["b".to_string()]);
    }

    #[test]
    fn test_membership_wins_over_hint() {
        let map = KnowledgeMap {
            nodes: vec![Node::new("a", "A").with_territory("t2")],
            edges: vec![],
            territories: vec![
                Territory {
                    id: "t1".into(),
                    name: "First".into(),
                    x: 0.0,
                    y: 0.0,
                    w: 10.0,
                    h: 10.0,
                    node_ids: vec!["a".into()],
                },
                Territory {
                    id: "t2".into(),
                    name: "Second".into(),
                    x: 0.0,
                    y: 0.0,
                    w: 10.0,
                    h: 10.0,
                    node_ids: vec!["a".into()],
                },
            ],
            metadata: None,
        };

        assert_eq!(map.owning_territory("a").unwrap().id, "t1");
    }

    #[test]
    fn test_wire_shape_round_trip() {
        let json = r#"{
            "nodes": [
                {"id": "n1", "label": "Rust", "type": "concept", "territoryId": "t1"},
                {"id": "n2", "label": "Ada Lovelace", "type": "person"}
            ],
            "edges": [
                {"id": "e1", "source": "n1", "target": "n2", "type": "dependency"}
            ],
            "territories": [
                {"id": "t1", "label": "Languages", "x": 0, "y": 0, "w": 300, "h": 200,
                 "nodeIds": ["n1"]}
            ]
        }"#;

        let map: KnowledgeMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.nodes[0].node_type, Some(NodeType::Concept));
        assert_eq!(map.nodes[0].territory_id.as_deref(), Some("t1"));
        assert_eq!(map.edges[0].edge_type, Some(EdgeType::Dependency));
        assert_eq!(map.territories[0].name, "Languages");
        assert!(map.territories[0].contains_node("n1"));

        let out = serde_json::to_string(&map).unwrap();
        assert!(out.contains("\"territoryId\":\"t1\""));
        assert!(out.contains("\"nodeIds\":[\"n1\"]"));
    }
}
