use crate::config::{HERO_FADE_END, HERO_MAX_OFFSET_PX};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTransform {
    pub opacity: f64,
    pub offset_px: f64,
}

impl HeroTransform {
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.1}px);",
            self.opacity, self.offset_px
        )
    }
}

/// How far the page has scrolled through the hero, `0.0..=1.0`.
pub fn scroll_progress(scroll_y: f64, hero_height: f64) -> f64 {
    if hero_height <= 0.0 {
        return 0.0;
    }
    (scroll_y / hero_height).clamp(0.0, 1.0)
}

/// Fades the hero copy out and pushes it down over the first part of the scroll.
pub fn hero_transform(progress: f64) -> HeroTransform {
    let t = (progress / HERO_FADE_END).clamp(0.0, 1.0);
    HeroTransform {
        opacity: 1.0 - t,
        offset_px: HERO_MAX_OFFSET_PX * t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(hero_transform(0.0), HeroTransform { opacity: 1.0, offset_px: 0.0 });
        assert_eq!(hero_transform(0.8), HeroTransform { opacity: 0.0, offset_px: 100.0 });
        assert_eq!(hero_transform(1.0), HeroTransform { opacity: 0.0, offset_px: 100.0 });
    }

    #[test]
    fn linear_in_between() {
        let mid = hero_transform(0.4);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.offset_px - 50.0).abs() < 1e-9);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(-20.0, 800.0), 0.0);
        assert_eq!(scroll_progress(400.0, 800.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 800.0), 1.0);
        assert_eq!(scroll_progress(100.0, 0.0), 0.0);
    }
}
