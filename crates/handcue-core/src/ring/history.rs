use std::collections::VecDeque;

use crate::hand::Landmark;

/// Default number of positions kept for swipe detection.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Bounded FIFO of tracked-point positions, oldest first.
#[derive(Clone, Debug)]
pub struct PositionHistory {
    points: VecDeque<Landmark>,
    capacity: usize,
}

impl PositionHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// A capacity of zero is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        PositionHistory {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a position, evicting the oldest one when full.
    pub fn push(&mut self, point: Landmark) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn oldest(&self) -> Option<&Landmark> {
        self.points.front()
    }

    pub fn newest(&self) -> Option<&Landmark> {
        self.points.back()
    }

    /// Net movement from the oldest to the newest position.
    pub fn displacement(&self) -> Option<(f32, f32)> {
        let start = self.oldest()?;
        let end = self.newest()?;
        Some((end.x - start.x, end.y - start.y))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.points.iter()
    }
}

impl Default for PositionHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_oldest_when_full() {
        let mut history = PositionHistory::with_capacity(3);
        for i in 0..5 {
            history.push(Landmark::new(i as f32, 0.0));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.oldest().unwrap().x, 2.0);
        assert_eq!(history.newest().unwrap().x, 4.0);
    }

    #[test]
    fn test_displacement() {
        let mut history = PositionHistory::new();
        assert!(history.displacement().is_none());

        history.push(Landmark::new(0.5, 0.8));
        history.push(Landmark::new(0.5, 0.6));
        history.push(Landmark::new(0.5, 0.5));
        let (dx, dy) = history.displacement().unwrap();
        assert!(dx.abs() < 1e-6);
        assert!((dy + 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut history = PositionHistory::with_capacity(0);
        history.push(Landmark::new(0.1, 0.1));
        history.push(Landmark::new(0.2, 0.2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.capacity(), 1);
    }
}
