use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::logo::Logo;
use crate::config::HEADER_SCROLL_THRESHOLD;
use crate::hooks::use_scroll_y;

const NAV_ITEMS: [(&str, &str); 5] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Courses", "#courses"),
    ("Events", "#events"),
    ("Contact", "#contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scroll_y() > HEADER_SCROLL_THRESHOLD;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchors still navigate; only the menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        transition: all 0.3s;
                        background: transparent;
                    }
                    .site-header.scrolled {
                        background: rgba(16, 16, 56, 0.8);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 0 15px rgba(0, 240, 255, 0.3);
                    }
                    .header-bar {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 0.75rem 1rem;
                    }
                    .desktop-nav {
                        display: none;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        position: relative;
                        padding: 0.25rem 0.5rem;
                        font-family: "Orbitron", sans-serif;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        opacity: 0;
                        animation: drop-in 0.5s ease-out forwards;
                    }
                    .nav-link::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        bottom: 0;
                        height: 2px;
                        width: 0;
                        background: #00F0FF;
                        transition: width 0.3s;
                    }
                    .nav-link:hover::after { width: 100%; }
                    .burger-menu {
                        background: none;
                        border: none;
                        color: #00F0FF;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        max-height: 0;
                        opacity: 0;
                        overflow: hidden;
                        background: rgba(16, 16, 56, 0.95);
                        backdrop-filter: blur(12px);
                        transition: max-height 0.3s, opacity 0.3s;
                    }
                    .mobile-menu.open {
                        max-height: 24rem;
                        opacity: 1;
                    }
                    .mobile-menu nav {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem;
                    }
                    .mobile-link {
                        padding: 0.5rem 1rem;
                        border-left: 2px solid #00F0FF;
                        font-family: "Orbitron", sans-serif;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                    }
                    @keyframes drop-in {
                        from { opacity: 0; transform: translateY(-10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (min-width: 768px) {
                        .desktop-nav { display: flex; }
                        .burger-menu, .mobile-menu { display: none; }
                    }
                "#}
            </style>
            <div class="container header-bar">
                <Logo />

                <nav class="desktop-nav">
                    { for NAV_ITEMS.iter().enumerate().map(|(i, (name, href))| html! {
                        <a
                            href={*href}
                            class="nav-link"
                            style={format!("animation-delay: {:.1}s;", i as f64 * 0.1)}
                        >
                            {*name}
                        </a>
                    }) }
                    <a
                        href="#contact"
                        class="neon-button glow-cyan nav-cta"
                        style={format!("animation-delay: {:.1}s;", NAV_ITEMS.len() as f64 * 0.1)}
                    >
                        {"Enroll Now"}
                    </a>
                </nav>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                <nav>
                    { for NAV_ITEMS.iter().map(|(name, href)| html! {
                        <a href={*href} class="mobile-link" onclick={close_menu.clone()}>
                            {"› "}{*name}
                        </a>
                    }) }
                    <a href="#contact" class="neon-button glow-cyan" onclick={close_menu.clone()}>
                        {"Enroll Now"}
                    </a>
                </nav>
            </div>
        </header>
    }
}
