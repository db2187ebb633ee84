//! Image carousel state for the detail view.
//!
//! One active index over a property's ordered image list, wrapping at both
//! ends. The state is bound to a property id; [`CarouselState::retarget`]
//! must run whenever the displayed property changes, otherwise the previous
//! property's index would leak onto the new image list.

use thiserror::Error;

use crate::models::PropertyRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("image index {index} out of range for {len} images")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    property_id: String,
    active_index: usize,
    image_count: usize,
}

impl CarouselState {
    /// Fresh state bound to `record`, showing the cover image.
    pub fn for_property(record: &PropertyRecord) -> Self {
        Self {
            property_id: record.id.clone(),
            active_index: 0,
            image_count: record.images.len(),
        }
    }

    #[allow(dead_code)]
    pub fn property_id(&self) -> &str {
        &self.property_id
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[allow(dead_code)]
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// Advances to the next image, wrapping from the last back to the first.
    pub fn next(&mut self) {
        if self.image_count == 0 {
            return;
        }
        self.active_index = (self.active_index + 1) % self.image_count;
    }

    /// Steps to the previous image, wrapping from the first to the last.
    pub fn prev(&mut self) {
        if self.image_count == 0 {
            return;
        }
        self.active_index = (self.active_index + self.image_count - 1) % self.image_count;
    }

    /// Jumps straight to a thumbnail index.
    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.image_count {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.image_count,
            });
        }
        self.active_index = index;
        Ok(())
    }

    /// Rebinds to `record` when the displayed property changed, resetting to
    /// the cover image. Re-observing the same property keeps the position.
    pub fn retarget(&mut self, record: &PropertyRecord) {
        if self.property_id != record.id {
            *self = CarouselState::for_property(record);
        }
    }

    /// Position indicator, e.g. `3/8`.
    pub fn position_label(&self) -> String {
        format!("{}/{}", self.active_index + 1, self.image_count)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_starts_on_cover_image() {
        let state = CarouselState::for_property(&catalog::catalog()[0]);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.image_count(), 4);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut state = CarouselState::for_property(&catalog::catalog()[0]);
        for _ in 0..state.image_count() - 1 {
            state.next();
        }
        assert_eq!(state.active_index(), state.image_count() - 1);
        state.next();
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut state = CarouselState::for_property(&catalog::catalog()[0]);
        state.prev();
        assert_eq!(state.active_index(), state.image_count() - 1);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut state = CarouselState::for_property(&catalog::catalog()[2]);
        let n = state.image_count();
        for _ in 0..n {
            state.next();
        }
        assert_eq!(state.active_index(), 0);
        for _ in 0..n {
            state.prev();
        }
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_select_valid_index() {
        let mut state = CarouselState::for_property(&catalog::catalog()[2]);
        state.select(3).unwrap();
        assert_eq!(state.active_index(), 3);
    }

    #[test]
    fn test_select_out_of_range_leaves_state_unchanged() {
        let mut state = CarouselState::for_property(&catalog::catalog()[0]);
        state.select(1).unwrap();
        let err = state.select(99).unwrap_err();
        assert_eq!(
            err,
            CarouselError::OutOfRange {
                index: 99,
                len: state.image_count()
            }
        );
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn test_retarget_resets_for_new_property() {
        let records = catalog::catalog();
        let mut state = CarouselState::for_property(&records[0]);
        state.next();
        state.next();
        assert_eq!(state.active_index(), 2);

        state.retarget(&records[1]);
        assert_eq!(state.property_id(), records[1].id);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.image_count(), records[1].images.len());
    }

    #[test]
    fn test_retarget_same_property_keeps_position() {
        let records = catalog::catalog();
        let mut state = CarouselState::for_property(&records[0]);
        state.next();
        state.retarget(&records[0]);
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn test_position_label() {
        let mut state = CarouselState::for_property(&catalog::catalog()[0]);
        assert_eq!(state.position_label(), "1/4");
        state.next();
        assert_eq!(state.position_label(), "2/4");
    }
}
