//! Highlighted-row cursor for an open dropdown menu.
//!
//! Tracks which row the keyboard points at and the scroll offset of the
//! visible window. Movement is clamped: moving past either end leaves the
//! cursor where it is, it never wraps.

/// Cursor and scroll offset over `count` rows of which `visible` are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    cursor: usize,
    offset: usize,
    count: usize,
    visible: usize,
}

impl Highlight {
    /// A cursor on the first row.
    pub fn new(count: usize, visible: usize) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            count,
            visible,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn offset(&self) -> usize {
        self.offset
    }
    pub fn count(&self) -> usize {
        self.count
    }

    /// Resize to a new row count, clamping the cursor into range.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if self.count == 0 {
            self.cursor = 0;
            self.offset = 0;
        } else if self.cursor >= self.count {
            self.cursor = self.count - 1;
        }
        self.ensure_visible();
    }

    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible;
        self.ensure_visible();
    }

    /// Move up one row unless already on the first.
    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.ensure_visible();
        }
    }

    /// Move down one row unless already on the last.
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.count {
            self.cursor += 1;
            self.ensure_visible();
        }
    }

    /// Put the cursor on `index`, clamped to the last row.
    pub fn select(&mut self, index: usize) {
        if self.count == 0 {
            return;
        }
        self.cursor = index.min(self.count - 1);
        self.ensure_visible();
    }

    fn ensure_visible(&mut self) {
        if self.count == 0 || self.visible == 0 {
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.visible {
            self.offset = self.cursor + 1 - self.visible;
        }
        // Never leave blank rows below the last item.
        let max_offset = self.count.saturating_sub(self.visible);
        self.offset = self.offset.min(max_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_row() {
        let h = Highlight::new(5, 3);
        assert_eq!(h.cursor(), 0);
        assert_eq!(h.offset(), 0);
    }

    #[test]
    fn move_down_stops_at_last() {
        let mut h = Highlight::new(3, 10);
        for _ in 0..10 {
            h.move_down();
        }
        assert_eq!(h.cursor(), 2);
    }

    #[test]
    fn move_up_stops_at_first() {
        let mut h = Highlight::new(3, 10);
        h.move_down();
        for _ in 0..10 {
            h.move_up();
        }
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn bounds_hold_for_any_length() {
        for count in 0..8 {
            let mut h = Highlight::new(count, 4);
            for _ in 0..count + 3 {
                h.move_down();
                assert!(count == 0 || h.cursor() < count);
            }
            for _ in 0..count + 3 {
                h.move_up();
            }
            assert_eq!(h.cursor(), 0);
        }
    }

    #[test]
    fn empty_count_is_noop() {
        let mut h = Highlight::new(0, 5);
        h.move_down();
        h.move_up();
        h.select(3);
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn offset_follows_cursor() {
        let mut h = Highlight::new(4, 2);
        h.move_down(); // 1
        assert_eq!(h.offset(), 0);
        h.move_down(); // 2
        assert_eq!(h.offset(), 1);
        h.move_down(); // 3
        assert_eq!(h.offset(), 2);
        h.move_up(); // 2
        h.move_up(); // 1
        assert_eq!(h.offset(), 1);
    }

    #[test]
    fn set_count_clamps_cursor() {
        let mut h = Highlight::new(10, 5);
        h.select(8);
        h.set_count(5);
        assert_eq!(h.cursor(), 4);
        assert_eq!(h.offset(), 0);
    }

    #[test]
    fn select_clamps() {
        let mut h = Highlight::new(5, 3);
        h.select(100);
        assert_eq!(h.cursor(), 4);
        assert_eq!(h.offset(), 2);
    }
}
