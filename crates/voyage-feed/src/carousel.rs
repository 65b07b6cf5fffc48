//! Banner rotation state.

use std::time::Duration;

/// Looping selection over a fixed number of banner slides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerCarousel {
    len: usize,
    selected: usize,
    interval: Duration,
}

impl BannerCarousel {
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            len,
            selected: 0,
            interval,
        }
    }

    pub fn from_interval_ms(len: usize, interval_ms: u64) -> Self {
        Self::new(len, Duration::from_millis(interval_ms))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_selected(&self, index: usize) -> bool {
        !self.is_empty() && index == self.selected
    }

    pub fn next(&mut self) -> usize {
        if !self.is_empty() {
            self.selected = (self.selected + 1) % self.len;
        }
        self.selected
    }

    pub fn prev(&mut self) -> usize {
        if !self.is_empty() {
            self.selected = (self.selected + self.len - 1) % self.len;
        }
        self.selected
    }

    /// Jump to a dot; out-of-range indexes are ignored
    pub fn scroll_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.selected = index;
        true
    }

    /// Auto-advance: step forward, restarting from the first slide at the end
    pub fn tick(&mut self) -> usize {
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut carousel = BannerCarousel::from_interval_ms(3, 5_000);
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.tick(), 1);
        assert_eq!(carousel.tick(), 2);
        assert_eq!(carousel.tick(), 0);
        assert_eq!(carousel.interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_scroll_to_bounds() {
        let mut carousel = BannerCarousel::from_interval_ms(3, 5_000);
        assert!(carousel.scroll_to(2));
        assert!(carousel.is_selected(2));
        assert!(!carousel.scroll_to(3));
        assert_eq!(carousel.selected(), 2);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = BannerCarousel::from_interval_ms(0, 5_000);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
        assert!(!carousel.is_selected(0));
        assert!(!carousel.scroll_to(0));
    }
}
