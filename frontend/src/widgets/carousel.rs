//! Cursor over a fixed list, shown through a window whose size follows the
//! viewport breakpoints.

use std::ops::Range;
use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config::{DESKTOP_BREAKPOINT, TABLET_BREAKPOINT};

/// Number of items visible at once for a viewport width in CSS pixels.
pub fn window_size_for(width: f64) -> usize {
    if width >= DESKTOP_BREAKPOINT {
        3
    } else if width >= TABLET_BREAKPOINT {
        2
    } else {
        1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Moved,
    AtStart,
    AtEnd,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    window: usize,
    cursor: usize,
}

impl Carousel {
    pub fn new(len: usize, viewport_width: f64) -> Self {
        Self {
            len,
            window: window_size_for(viewport_width),
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn window_size(&self) -> usize {
        self.window
    }

    /// Largest legal cursor, `N - W` (zero when everything fits).
    pub fn max_cursor(&self) -> usize {
        self.len.saturating_sub(self.window)
    }

    pub fn advance(&mut self) -> NavOutcome {
        if self.at_end() {
            return NavOutcome::AtEnd;
        }
        self.cursor = (self.cursor + 1).min(self.max_cursor());
        NavOutcome::Moved
    }

    pub fn retreat(&mut self) -> NavOutcome {
        if self.at_start() {
            return NavOutcome::AtStart;
        }
        self.cursor -= 1;
        NavOutcome::Moved
    }

    /// Moves to the first item of page `page`; any integer is accepted.
    pub fn jump_to_page(&mut self, page: i64) {
        let target = page.saturating_mul(self.window as i64);
        self.cursor = target.clamp(0, self.max_cursor() as i64) as usize;
    }

    /// Applies a new viewport width and re-clamps the cursor.
    pub fn resize(&mut self, viewport_width: f64) {
        self.window = window_size_for(viewport_width);
        self.cursor = self.cursor.min(self.max_cursor());
    }

    pub fn visible_range(&self) -> Range<usize> {
        self.cursor..(self.cursor + self.window).min(self.len)
    }

    pub fn visible_window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    pub fn page_count(&self) -> usize {
        if self.len <= self.window {
            1
        } else {
            (self.len + self.window - 1) / self.window
        }
    }

    pub fn active_page(&self) -> usize {
        self.cursor / self.window
    }

    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.max_cursor()
    }

    /// Horizontal track offset in percent of the viewport.
    pub fn track_offset_percent(&self) -> f64 {
        -(self.cursor as f64) * 100.0 / self.window as f64
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselAction {
    Advance,
    Retreat,
    JumpToPage(i64),
    Resize(f64),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Advance => {
                if next.advance() == NavOutcome::AtEnd {
                    debug!("carousel already at end");
                }
            }
            CarouselAction::Retreat => {
                if next.retreat() == NavOutcome::AtStart {
                    debug!("carousel already at start");
                }
            }
            CarouselAction::JumpToPage(page) => next.jump_to_page(page),
            CarouselAction::Resize(width) => next.resize(width),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: f64 = 1280.0;
    const TABLET: f64 = 800.0;
    const MOBILE: f64 = 375.0;

    #[test]
    fn breakpoints() {
        assert_eq!(window_size_for(1024.0), 3);
        assert_eq!(window_size_for(1023.0), 2);
        assert_eq!(window_size_for(768.0), 2);
        assert_eq!(window_size_for(767.0), 1);
        assert_eq!(window_size_for(0.0), 1);
    }

    #[test]
    fn advancing_five_items_on_desktop() {
        let mut carousel = Carousel::new(5, DESKTOP);
        assert_eq!(carousel.visible_range(), 0..3);

        assert_eq!(carousel.advance(), NavOutcome::Moved);
        assert_eq!(carousel.cursor(), 1);
        assert_eq!(carousel.visible_range(), 1..4);

        assert_eq!(carousel.advance(), NavOutcome::Moved);
        assert_eq!(carousel.cursor(), 2);
        assert_eq!(carousel.visible_range(), 2..5);

        assert_eq!(carousel.advance(), NavOutcome::AtEnd);
        assert_eq!(carousel.cursor(), 2);
    }

    #[test]
    fn retreat_stops_at_zero() {
        let mut carousel = Carousel::new(5, MOBILE);
        assert_eq!(carousel.retreat(), NavOutcome::AtStart);
        carousel.advance();
        assert_eq!(carousel.retreat(), NavOutcome::Moved);
        assert_eq!(carousel.retreat(), NavOutcome::AtStart);
        assert_eq!(carousel.cursor(), 0);
    }

    #[test]
    fn mixed_navigation_stays_in_bounds() {
        for width in [DESKTOP, TABLET, MOBILE] {
            let mut carousel = Carousel::new(5, width);
            // deterministic pseudo-random walk
            let mut seed: u32 = 7;
            for _ in 0..200 {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                if seed & 0x100 == 0 {
                    carousel.advance();
                } else {
                    carousel.retreat();
                }
                assert!(carousel.cursor() <= carousel.max_cursor());
                assert_eq!(carousel.visible_range().len(), carousel.window_size());
            }
        }
    }

    #[test]
    fn jump_clamps_any_page() {
        let mut carousel = Carousel::new(5, DESKTOP);
        for page in [-5, -1, 0, 1, 2, 3, 100, i64::MAX, i64::MIN] {
            carousel.jump_to_page(page);
            assert!(carousel.cursor() <= 2, "page {page} gave {}", carousel.cursor());
        }
        carousel.jump_to_page(1);
        assert_eq!(carousel.cursor(), 2);
        carousel.jump_to_page(-3);
        assert_eq!(carousel.cursor(), 0);
    }

    #[test]
    fn pages_and_active_indicator() {
        let mut carousel = Carousel::new(5, TABLET);
        assert_eq!(carousel.page_count(), 3);
        carousel.jump_to_page(1);
        assert_eq!(carousel.cursor(), 2);
        assert_eq!(carousel.active_page(), 1);
        carousel.jump_to_page(2);
        assert_eq!(carousel.cursor(), 3);
        assert_eq!(carousel.active_page(), 1);

        let desktop = Carousel::new(5, DESKTOP);
        assert_eq!(desktop.page_count(), 2);
    }

    #[test]
    fn shrinking_viewport_keeps_cursor() {
        let mut carousel = Carousel::new(5, DESKTOP);
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.cursor(), 2);
        carousel.resize(MOBILE);
        assert_eq!(carousel.window_size(), 1);
        assert_eq!(carousel.cursor(), 2);
        assert_eq!(carousel.max_cursor(), 4);
    }

    #[test]
    fn growing_viewport_reclamps_cursor() {
        let mut carousel = Carousel::new(5, MOBILE);
        carousel.jump_to_page(4);
        assert_eq!(carousel.cursor(), 4);
        carousel.resize(DESKTOP);
        assert_eq!(carousel.cursor(), 2);
        carousel.resize(DESKTOP);
        assert_eq!(carousel.cursor(), 2);
        assert_eq!(carousel.visible_range(), 2..5);
    }

    #[test]
    fn short_list_is_pinned() {
        let mut carousel = Carousel::new(2, DESKTOP);
        assert_eq!(carousel.page_count(), 1);
        assert!(carousel.at_start() && carousel.at_end());
        assert_eq!(carousel.advance(), NavOutcome::AtEnd);
        carousel.jump_to_page(3);
        assert_eq!(carousel.cursor(), 0);
        assert_eq!(carousel.visible_window(&["a", "b"]), &["a", "b"]);
    }

    #[test]
    fn reducer_returns_same_rc_on_noop() {
        let carousel = Rc::new(Carousel::new(5, DESKTOP));
        let next = carousel.clone().reduce(CarouselAction::Retreat);
        assert!(Rc::ptr_eq(&carousel, &next));
        let next = next.reduce(CarouselAction::Advance);
        assert_eq!(next.cursor(), 1);
        assert_eq!(next.track_offset_percent(), -100.0 / 3.0);
    }
}
