//! Offset-encoded snake body
//!
//! Each entry stores the offset from the previous segment (or from the head
//! position, for entry 0) to that segment. Inserting a new segment behind the
//! head is O(1) and leaves every other offset untouched; absolute positions
//! are recovered with a prefix sum starting at the head.

use std::collections::VecDeque;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ordered segment offsets, head first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    offsets: VecDeque<Vec3>,
}

impl Body {
    /// A straight body of `length` segments trailing behind `direction`
    pub fn straight(direction: Vec3, length: usize) -> Self {
        Self {
            offsets: std::iter::repeat_n(-direction, length).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn offsets(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.offsets.iter().copied()
    }

    /// Insert a segment directly behind the head
    pub fn push_head(&mut self, offset: Vec3) {
        self.offsets.push_front(offset);
    }

    /// Remove the segment directly behind the head
    pub fn pop_head(&mut self) -> Option<Vec3> {
        self.offsets.pop_front()
    }

    /// Remove the last segment
    pub fn pop_tail(&mut self) -> Option<Vec3> {
        self.offsets.pop_back()
    }

    /// Put a previously popped tail segment back
    pub fn restore_tail(&mut self, offset: Vec3) {
        self.offsets.push_back(offset);
    }

    /// Absolute segment positions given the head position (head excluded)
    pub fn positions(&self, head: Vec3) -> impl Iterator<Item = Vec3> + '_ {
        self.offsets.iter().scan(head, |sum, offset| {
            *sum += *offset;
            Some(*sum)
        })
    }

    /// True if any segment lies within `epsilon` of the head itself.
    ///
    /// Walks the cumulative offset from zero, so the head position never
    /// needs to be known.
    pub fn overlaps_head(&self, epsilon: f32) -> bool {
        self.positions(Vec3::ZERO).any(|sum| sum.length() < epsilon)
    }

    /// True if `point` lies within `epsilon` of the head or any segment
    pub fn occupies(&self, head: Vec3, point: Vec3, epsilon: f32) -> bool {
        head.distance(point) < epsilon || self.positions(head).any(|p| p.distance(point) < epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_body_positions() {
        let body = Body::straight(Vec3::Y, 3);
        let positions: Vec<Vec3> = body.positions(Vec3::new(0.0, 5.0, 0.0)).collect();
        assert_eq!(
            positions,
            vec![
                Vec3::new(0.0, 4.0, 0.0),
                Vec3::new(0.0, 3.0, 0.0),
                Vec3::new(0.0, 2.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_push_head_and_pop_tail() {
        let mut body = Body::straight(Vec3::Y, 2);
        body.push_head(Vec3::NEG_X);
        assert_eq!(body.len(), 3);
        assert_eq!(body.offsets().next(), Some(Vec3::NEG_X));

        let tail = body.pop_tail();
        assert_eq!(tail, Some(Vec3::NEG_Y));
        assert_eq!(body.len(), 2);

        body.restore_tail(Vec3::NEG_Y);
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn test_overlaps_head_detects_loop() {
        // Head moved +x, +y, -x, then -y back onto the first segment
        let mut body = Body::default();
        body.push_head(Vec3::NEG_X);
        body.push_head(Vec3::NEG_Y);
        body.push_head(Vec3::X);
        assert!(!body.overlaps_head(0.1));

        body.push_head(Vec3::Y);
        assert!(body.overlaps_head(0.1));
    }

    #[test]
    fn test_occupies_includes_head() {
        let body = Body::straight(Vec3::X, 2);
        let head = Vec3::new(3.0, 0.0, 0.0);
        assert!(body.occupies(head, head, 0.1));
        assert!(body.occupies(head, Vec3::new(1.0, 0.0, 0.0), 0.1));
        assert!(!body.occupies(head, Vec3::new(0.0, 0.0, 0.0), 0.1));
        assert!(!body.occupies(head, Vec3::new(4.0, 0.0, 0.0), 0.1));
    }
}
