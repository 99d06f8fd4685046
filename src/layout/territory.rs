//! Territory sizing and member packing
//!
//! The auto-generate path receives territories as bare name + membership
//! lists. This module gives each one a box sized for a two-column grid of
//! node cards, arranges the boxes in a three-column canvas grid, and drops
//! every member onto its grid slot — clamped so the card footprint can
//! never escape the territory's padded interior. Nodes that belong to no
//! territory are scattered somewhere visible inside a fixed fallback
//! region; that position is random by design.

use std::collections::HashSet;

use rand::Rng;

use crate::model::{Node, Territory, TerritoryDraft};

use super::config::LayoutConfig;
use super::error::LayoutError;
use super::types::{ClampEvent, LayoutReport, Point};

/// Cards per row inside a territory box
const CARD_COLUMNS: usize = 2;

/// Size territories, arrange them on the canvas grid, and place their
/// member nodes. Returns the finished territories plus a report of any
/// clamp adjustments (clamping is diagnostic, never fatal).
///
/// Territory ids are assigned sequentially; member nodes get their
/// `territory_id` updated to match, and stale hints on orphan nodes are
/// cleared. Membership entries that name unknown nodes are skipped.
pub fn pack_territories(
    drafts: Vec<TerritoryDraft>,
    nodes: &mut [Node],
    config: &LayoutConfig,
) -> Result<(Vec<Territory>, LayoutReport), LayoutError> {
    config.validate()?;
    let mut report = LayoutReport::new();

    let sizes: Vec<(f64, f64)> = drafts
        .iter()
        .map(|d| territory_size(d.node_ids.len(), config))
        .collect();

    // Canvas grid: left-to-right then top-to-bottom, each column as wide
    // as its widest box and each row as tall as its tallest.
    let cols = config.territory_columns;
    let row_count = drafts.len().div_ceil(cols);
    let mut col_widths = vec![0.0f64; cols];
    let mut row_heights = vec![0.0f64; row_count];
    for (i, (w, h)) in sizes.iter().enumerate() {
        let (col, row) = (i % cols, i / cols);
        col_widths[col] = col_widths[col].max(*w);
        row_heights[row] = row_heights[row].max(*h);
    }

    let (origin_x, origin_y) = config.territory_origin;
    let mut territories = Vec::with_capacity(drafts.len());
    for (i, draft) in drafts.into_iter().enumerate() {
        let (w, h) = sizes[i];
        let (col, row) = (i % cols, i / cols);
        let x = origin_x
            + col_widths[..col].iter().sum::<f64>()
            + col as f64 * config.territory_spacing;
        let y = origin_y
            + row_heights[..row].iter().sum::<f64>()
            + row as f64 * config.territory_spacing;
        territories.push(Territory {
            id: format!("territory-{}", i + 1),
            name: draft.name,
            x,
            y,
            w,
            h,
            node_ids: draft.node_ids,
        });
    }

    for territory in &territories {
        for (slot, node_id) in territory.node_ids.iter().enumerate() {
            let Some(node) = nodes.iter_mut().find(|n| &n.id == node_id) else {
                continue;
            };
            let requested = card_slot_center(territory, slot, config);
            let applied = clamp_center(requested, territory, config);
            if applied != requested {
                report.record_clamp(ClampEvent {
                    node_id: node.id.clone(),
                    territory_id: territory.id.clone(),
                    requested,
                    applied,
                });
            }
            node.x = applied.x;
            node.y = applied.y;
            node.territory_id = Some(territory.id.clone());
        }
    }

    scatter_orphans(&territories, nodes, config);

    Ok((territories, report))
}

/// Box dimensions for a territory holding `member_count` cards, floored at
/// the configured minimums.
fn territory_size(member_count: usize, config: &LayoutConfig) -> (f64, f64) {
    let width = (CARD_COLUMNS as f64 * config.card_width
        + config.card_gap
        + 2.0 * config.territory_padding)
        .max(config.territory_min_width);

    let rows = member_count.div_ceil(CARD_COLUMNS);
    let height = (config.territory_header
        + 2.0 * config.territory_padding
        + rows as f64 * config.card_height
        + rows.saturating_sub(1) as f64 * config.card_gap)
        .max(config.territory_min_height);

    (width, height)
}

/// Unclamped card center for the member at `slot` within its territory
fn card_slot_center(territory: &Territory, slot: usize, config: &LayoutConfig) -> Point {
    let col = slot % CARD_COLUMNS;
    let row = slot / CARD_COLUMNS;
    Point::new(
        territory.x
            + config.territory_padding
            + config.card_width / 2.0
            + col as f64 * (config.card_width + config.card_gap),
        territory.y
            + config.territory_header
            + config.territory_padding
            + config.card_height / 2.0
            + row as f64 * (config.card_height + config.card_gap),
    )
}

/// Clamp a card center so the full card footprint stays inside the
/// territory's padded interior (below the header). A box too small to hold
/// a card at all collapses the card onto the interior's midline.
pub(crate) fn clamp_center(point: Point, territory: &Territory, config: &LayoutConfig) -> Point {
    let min_x = territory.x + config.territory_padding + config.card_width / 2.0;
    let max_x = territory.x + territory.w - config.territory_padding - config.card_width / 2.0;
    let min_y = territory.y
        + config.territory_header
        + config.territory_padding
        + config.card_height / 2.0;
    let max_y = territory.y + territory.h - config.territory_padding - config.card_height / 2.0;

    Point::new(
        clamp_axis(point.x, min_x, max_x),
        clamp_axis(point.y, min_y, max_y),
    )
}

fn clamp_axis(value: f64, lo: f64, hi: f64) -> f64 {
    if hi < lo {
        (lo + hi) / 2.0
    } else {
        value.max(lo).min(hi)
    }
}

/// Drop nodes owned by no territory at a random spot inside the fallback
/// region. Non-deterministic by design; only the bounds are guaranteed.
fn scatter_orphans(territories: &[Territory], nodes: &mut [Node], config: &LayoutConfig) {
    let members: HashSet<&str> = territories
        .iter()
        .flat_map(|t| t.node_ids.iter().map(String::as_str))
        .collect();

    let region = config.fallback_region;
    let mut rng = rand::thread_rng();
    for node in nodes.iter_mut().filter(|n| !members.contains(n.id.as_str())) {
        tracing::debug!(node = %node.id, "no owning territory, using fallback region");
        node.x = random_in_span(&mut rng, region.x, region.right(), config.card_width);
        node.y = random_in_span(&mut rng, region.y, region.bottom(), config.card_height);
        node.territory_id = None;
    }
}

/// Random coordinate keeping a card of the given extent inside [lo, hi]
fn random_in_span(rng: &mut impl Rng, lo: f64, hi: f64, extent: f64) -> f64 {
    let min = lo + extent / 2.0;
    let max = hi - extent / 2.0;
    if max <= min {
        (lo + hi) / 2.0
    } else {
        rng.gen_range(min..max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizing_floors_apply() {
        let config = LayoutConfig::default();
        let (w, h) = territory_size(0, &config);
        assert!(w >= config.territory_min_width);
        assert!(h >= config.territory_min_height);
    }

    #[test]
    fn test_sizing_grows_by_rows() {
        let config = LayoutConfig::default();
        let (_, h2) = territory_size(2, &config); // one row
        let (_, h3) = territory_size(3, &config); // two rows
        let (_, h4) = territory_size(4, &config); // still two rows
        assert!(h3 > h2 || h2 == config.territory_min_height);
        assert_eq!(h3, h4);

        let (w12, h12) = territory_size(12, &config);
        let expected_h = config.territory_header
            + 2.0 * config.territory_padding
            + 6.0 * config.card_height
            + 5.0 * config.card_gap;
        assert_eq!(h12, expected_h.max(config.territory_min_height));
        // width is independent of member count
        assert_eq!(w12, territory_size(1, &config).0);
    }

    #[test]
    fn test_clamp_center_on_undersized_box() {
        let config = LayoutConfig::default();
        // box far too small for the configured card
        let territory = Territory {
            id: "t1".into(),
            name: "tiny".into(),
            x: 0.0,
            y: 0.0,
            w: 100.0,
            h: 80.0,
            node_ids: vec![],
        };
        let clamped = clamp_center(Point::new(500.0, 500.0), &territory, &config);
        assert!(clamped.x.is_finite() && clamped.y.is_finite());
        assert!(clamped.x < 100.0 && clamped.y < 80.0);
    }

    #[test]
    fn test_clamp_axis() {
        assert_eq!(clamp_axis(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp_axis(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_axis(42.0, 0.0, 10.0), 10.0);
        // inverted interval collapses to its midpoint
        assert_eq!(clamp_axis(7.0, 10.0, 0.0), 5.0);
    }

    #[test]
    fn test_pack_assigns_ids_and_ownership() {
        let config = LayoutConfig::default();
        let mut nodes = vec![Node::new("a", "A"), Node::new("b", "B")];
        let drafts = vec![
            TerritoryDraft::new("One", vec!["a".into()]),
            TerritoryDraft::new("Two", vec!["b".into(), "ghost".into()]),
        ];

        let (territories, report) = pack_territories(drafts, &mut nodes, &config).unwrap();

        assert_eq!(territories[0].id, "territory-1");
        assert_eq!(territories[1].id, "territory-2");
        assert_eq!(nodes[0].territory_id.as_deref(), Some("territory-1"));
        assert_eq!(nodes[1].territory_id.as_deref(), Some("territory-2"));
        assert!(report.is_clean());
    }
}
