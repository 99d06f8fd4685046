//! Core geometry and diagnostic types for the layout engine

use serde::{Deserialize, Serialize};

/// A 2D point in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if this box contains a point (edges inclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }
}

/// A recoverable geometry adjustment recorded during territory packing.
///
/// Clamping is never an error; it is reported so callers can surface
/// diagnostics when a node's grid slot would have escaped its territory.
#[derive(Debug, Clone, PartialEq)]
pub struct ClampEvent {
    pub node_id: String,
    pub territory_id: String,
    /// Where the grid formula wanted to put the card center
    pub requested: Point,
    /// Where it actually went
    pub applied: Point,
}

/// Diagnostics accumulated over one territory-packing pass
#[derive(Debug, Clone, Default)]
pub struct LayoutReport {
    pub clamp_events: Vec<ClampEvent>,
}

impl LayoutReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.clamp_events.is_empty()
    }

    pub(crate) fn record_clamp(&mut self, event: ClampEvent) {
        tracing::debug!(
            node = %event.node_id,
            territory = %event.territory_id,
            "card position clamped to territory interior"
        );
        self.clamp_events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);
    }

    #[test]
    fn test_bounding_box_edges() {
        let bb = BoundingBox::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(bb.right(), 110.0);
        assert_eq!(bb.bottom(), 70.0);
    }

    #[test]
    fn test_bounding_box_center() {
        let bb = BoundingBox::new(0.0, 0.0, 100.0, 50.0);
        let center = bb.center();
        assert_eq!(center.x, 50.0);
        assert_eq!(center.y, 25.0);
    }

    #[test]
    fn test_bounding_box_contains() {
        let bb = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        assert!(bb.contains(Point::new(50.0, 50.0)));
        assert!(bb.contains(Point::new(0.0, 0.0)));
        assert!(bb.contains(Point::new(100.0, 100.0)));
        assert!(!bb.contains(Point::new(-1.0, 50.0)));
        assert!(!bb.contains(Point::new(101.0, 50.0)));
    }

    #[test]
    fn test_report_starts_clean() {
        let report = LayoutReport::new();
        assert!(report.is_clean());
    }
}
