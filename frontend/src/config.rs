#[cfg(debug_assertions)]
pub fn base_path() -> Option<&'static str> {
    None  // trunk serve at the root
}

#[cfg(not(debug_assertions))]
pub fn base_path() -> Option<&'static str> {
    Some("/college-static-website-three")  // GitHub Pages project path
}

// Viewport widths (CSS px) at which the event carousel shows 2 and 3 cards.
pub const DESKTOP_BREAKPOINT: f64 = 1024.0;
pub const TABLET_BREAKPOINT: f64 = 768.0;

pub const COUNTER_FPS: f64 = 60.0;
pub const COUNTER_DURATION_MS: u32 = 2000;

// Shrinks the viewport box so elements count as visible only once they are
// 100px inside it.
pub const REVEAL_ROOT_MARGIN: &str = "-100px";

pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

// Hero copy is fully faded at 80% of the hero height and moved down 100px.
pub const HERO_FADE_END: f64 = 0.8;
pub const HERO_MAX_OFFSET_PX: f64 = 100.0;

pub const CONTACT_SUBMIT_DELAY_MS: u32 = 1_500;
pub const CONTACT_SENT_DISPLAY_MS: u32 = 5_000;
