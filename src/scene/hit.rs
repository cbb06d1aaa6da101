//! Gesture-to-slot resolution.
//!
//! The scene layer answers "which card did this tap hit?". Background taps
//! resolve to `None` and are absorbed by the machine. `GridHitTester` is a
//! reference implementation for a flat grid layout; AR embedders will
//! usually substitute their renderer's own 3D hit test.

use crate::core::{GameConfig, SlotId};

/// Resolves a 2D point to the card slot under it, if any.
pub trait HitTester {
    /// The slot at `point`, or `None` for background.
    fn hit_test(&self, point: (f32, f32)) -> Option<SlotId>;
}

/// Hit tester for a row-major grid of square cards.
///
/// Slot centers sit on a regular pitch starting at `origin`; a tap counts
/// as a hit when it falls within the card's half-extent of a center. The
/// defaults mirror the original board: 4 columns, 0.1 pitch, 0.04 cards.
#[derive(Clone, Copy, Debug)]
pub struct GridHitTester {
    columns: u8,
    slot_count: usize,
    origin: (f32, f32),
    pitch: f32,
    card_size: f32,
}

impl GridHitTester {
    /// Create a hit tester for the configured board.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            columns: config.columns,
            slot_count: config.slot_count(),
            origin: (0.0, 0.0),
            pitch: 0.1,
            card_size: 0.04,
        }
    }

    /// Set the board origin (center of slot 0).
    #[must_use]
    pub fn with_origin(mut self, origin: (f32, f32)) -> Self {
        self.origin = origin;
        self
    }

    /// Set the center-to-center slot pitch.
    #[must_use]
    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }

    /// Set the card edge length.
    #[must_use]
    pub fn with_card_size(mut self, card_size: f32) -> Self {
        self.card_size = card_size;
        self
    }

    /// Center point of a slot.
    #[must_use]
    pub fn slot_center(&self, slot: SlotId) -> (f32, f32) {
        (
            self.origin.0 + f32::from(slot.column(self.columns)) * self.pitch,
            self.origin.1 + f32::from(slot.row(self.columns)) * self.pitch,
        )
    }
}

impl HitTester for GridHitTester {
    fn hit_test(&self, point: (f32, f32)) -> Option<SlotId> {
        let half = self.card_size / 2.0;

        for slot in SlotId::all(self.slot_count) {
            let (cx, cy) = self.slot_center(slot);
            if (point.0 - cx).abs() <= half && (point.1 - cy).abs() <= half {
                return Some(slot);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn tester() -> GridHitTester {
        GridHitTester::new(&GameConfig::default())
    }

    #[test]
    fn test_hit_slot_centers() {
        let t = tester();

        assert_eq!(t.hit_test((0.0, 0.0)), Some(SlotId::new(0)));
        assert_eq!(t.hit_test((0.3, 0.0)), Some(SlotId::new(3)));
        assert_eq!(t.hit_test((0.1, 0.2)), Some(SlotId::new(9)));
        assert_eq!(t.hit_test((0.3, 0.3)), Some(SlotId::new(15)));
    }

    #[test]
    fn test_background_misses() {
        let t = tester();

        // Between cards: pitch 0.1, card half-extent 0.02.
        assert_eq!(t.hit_test((0.05, 0.0)), None);
        // Far off the board.
        assert_eq!(t.hit_test((2.0, 2.0)), None);
        assert_eq!(t.hit_test((-1.0, 0.0)), None);
    }

    #[test]
    fn test_edge_of_card_hits() {
        let t = tester();

        assert_eq!(t.hit_test((0.019, 0.0)), Some(SlotId::new(0)));
        assert_eq!(t.hit_test((0.021, 0.0)), None);
    }

    #[test]
    fn test_custom_origin() {
        let t = tester().with_origin((1.0, 1.0));

        assert_eq!(t.hit_test((1.0, 1.0)), Some(SlotId::new(0)));
        assert_eq!(t.hit_test((0.0, 0.0)), None);
    }
}
