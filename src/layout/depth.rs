//! Hierarchical depth resolution
//!
//! Assigns every node an integer tier: nodes with no incoming `dependency`
//! or `hierarchy` edge sit at depth 0, and every other node sits one tier
//! below its deepest such parent. The concept graph coming out of the
//! generation call is frequently cyclic, so the resolver must never follow
//! a dependency loop forever.
//!
//! Cycle behavior is part of the contract: all nodes on a cycle collapse
//! onto a single tier, one below the deepest node feeding the cycle from
//! outside. A node whose only incoming edge is its own self-loop is a root.
//! Dangling edges (either endpoint unknown) are skipped as if absent.
//!
//! The traversal is bounded by [`LayoutConfig::max_traversal`]; a
//! pathological chain longer than the bound surfaces
//! [`LayoutError::GraphTooDeep`] instead of blowing the stack. Callers
//! recover by flattening every node to depth 0.

use std::collections::HashMap;

use crate::model::{Edge, Node};

use super::config::LayoutConfig;
use super::error::LayoutError;

/// Resolves hierarchical depths over one snapshot of the graph.
///
/// Construction partitions the dependency/hierarchy subgraph into cycles
/// (so resolution can collapse each onto one tier); [`resolve`] then walks
/// the collapsed graph longest-path-first.
///
/// [`resolve`]: DepthResolver::resolve
pub struct DepthResolver<'a> {
    ids: Vec<&'a str>,
    /// Cycle id per node
    comp: Vec<usize>,
    /// Incoming inter-cycle edges: for each cycle, the cycles feeding it
    comp_parents: Vec<Vec<usize>>,
    /// One member node per cycle, for error reporting
    comp_repr: Vec<usize>,
    limit: usize,
}

impl<'a> DepthResolver<'a> {
    pub fn new(nodes: &'a [Node], edges: &'a [Edge], config: &LayoutConfig) -> Self {
        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let lookup: HashMap<&str, usize> =
            ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();

        // Forward adjacency over depth-bearing edges. Dangling references
        // and self-loops contribute nothing.
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); ids.len()];
        for edge in edges {
            if !edge.is_hierarchical() || edge.source == edge.target {
                continue;
            }
            let (Some(&s), Some(&t)) = (
                lookup.get(edge.source.as_str()),
                lookup.get(edge.target.as_str()),
            ) else {
                continue;
            };
            children[s].push(t);
        }

        let comp = strongly_connected(&children);
        let comp_count = comp.iter().copied().max().map_or(0, |m| m + 1);

        let mut comp_parents: Vec<Vec<usize>> = vec![Vec::new(); comp_count];
        let mut comp_repr: Vec<usize> = vec![0; comp_count];
        for (v, &c) in comp.iter().enumerate() {
            comp_repr[c] = v;
        }
        for (s, targets) in children.iter().enumerate() {
            for &t in targets {
                if comp[s] != comp[t] && !comp_parents[comp[t]].contains(&comp[s]) {
                    comp_parents[comp[t]].push(comp[s]);
                }
            }
        }

        Self {
            ids,
            comp,
            comp_parents,
            comp_repr,
            limit: config.max_traversal,
        }
    }

    /// Compute the depth of every node in the snapshot.
    ///
    /// Total over any finite graph, cyclic or not; the only failure is the
    /// traversal bound.
    pub fn resolve(&self) -> Result<HashMap<String, u32>, LayoutError> {
        let mut memo: Vec<Option<u32>> = vec![None; self.comp_parents.len()];
        let mut depths = HashMap::with_capacity(self.ids.len());
        for (v, id) in self.ids.iter().enumerate() {
            let depth = self.cycle_depth(self.comp[v], &mut memo, 0)?;
            depths.insert((*id).to_string(), depth);
        }
        Ok(depths)
    }

    /// Depth of a single node, recomputed from the snapshot. Unknown ids
    /// resolve to 0.
    pub fn depth_of(&self, node_id: &str) -> Result<u32, LayoutError> {
        let depths = self.resolve()?;
        Ok(depths.get(node_id).copied().unwrap_or(0))
    }

    /// Longest path to a root over the cycle-collapsed graph.
    fn cycle_depth(
        &self,
        c: usize,
        memo: &mut Vec<Option<u32>>,
        level: usize,
    ) -> Result<u32, LayoutError> {
        if let Some(depth) = memo[c] {
            return Ok(depth);
        }
        if level >= self.limit {
            return Err(LayoutError::too_deep(self.ids[self.comp_repr[c]], self.limit));
        }

        let mut depth = 0;
        for i in 0..self.comp_parents[c].len() {
            let parent = self.comp_parents[c][i];
            depth = depth.max(1 + self.cycle_depth(parent, memo, level + 1)?);
        }
        memo[c] = Some(depth);
        Ok(depth)
    }
}

/// Partition the graph into strongly connected components (Tarjan,
/// iterative so deep chains cannot overflow the call stack). Returns a
/// component id per node; single nodes without a self-reaching path form
/// their own component.
fn strongly_connected(children: &[Vec<usize>]) -> Vec<usize> {
    let n = children.len();
    let mut index = vec![usize::MAX; n];
    let mut lowlink = vec![0usize; n];
    let mut on_stack = vec![false; n];
    let mut comp = vec![usize::MAX; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut call: Vec<(usize, usize)> = Vec::new();
    let mut next_index = 0usize;
    let mut comp_count = 0usize;

    for start in 0..n {
        if index[start] != usize::MAX {
            continue;
        }
        call.push((start, 0));
        while let Some(&(v, child_pos)) = call.last() {
            if index[v] == usize::MAX {
                index[v] = next_index;
                lowlink[v] = next_index;
                next_index += 1;
                stack.push(v);
                on_stack[v] = true;
            }

            if child_pos < children[v].len() {
                if let Some(frame) = call.last_mut() {
                    frame.1 += 1;
                }
                let w = children[v][child_pos];
                if index[w] == usize::MAX {
                    call.push((w, 0));
                } else if on_stack[w] {
                    lowlink[v] = lowlink[v].min(index[w]);
                }
            } else {
                call.pop();
                if let Some(&(parent, _)) = call.last() {
                    lowlink[parent] = lowlink[parent].min(lowlink[v]);
                }
                if lowlink[v] == index[v] {
                    while let Some(w) = stack.pop() {
                        on_stack[w] = false;
                        comp[w] = comp_count;
                        if w == v {
                            break;
                        }
                    }
                    comp_count += 1;
                }
            }
        }
    }

    comp
}
