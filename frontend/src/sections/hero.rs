use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::glitch_text::{GlitchLevel, GlitchText};
use crate::components::neon_button::NeonButton;
use crate::error;
use crate::hooks::use_scroll_y;
use crate::widgets::catalog::GlowColor;
use crate::widgets::parallax::{hero_transform, scroll_progress};

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let section = use_node_ref();
    let scroll_y = use_scroll_y();

    let hero_height = section
        .cast::<HtmlElement>()
        .map(|el| el.offset_height() as f64)
        .or_else(|| {
            error::window()
                .ok()
                .and_then(|w| w.inner_height().ok())
                .and_then(|h| h.as_f64())
        })
        .unwrap_or(0.0);
    let transform = hero_transform(scroll_progress(scroll_y, hero_height));

    html! {
        <section id="home" class="hero" ref={section}>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: -1;
                        perspective: 600px;
                    }
                    .hero-floor {
                        position: absolute;
                        left: -50%;
                        right: -50%;
                        bottom: -30%;
                        height: 80%;
                        background-image:
                            linear-gradient(rgba(0, 240, 255, 0.35) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(0, 240, 255, 0.35) 1px, transparent 1px);
                        background-size: 40px 40px;
                        transform: rotateX(70deg);
                        animation: floor-scroll 4s linear infinite;
                    }
                    .hero-orb {
                        position: absolute;
                        top: 30%;
                        left: 50%;
                        width: 220px;
                        height: 220px;
                        margin-left: -110px;
                        border-radius: 50%;
                        border: 18px solid #00F0FF;
                        box-shadow: 0 0 60px #00F0FF, inset 0 0 40px #FF3864;
                        opacity: 0.35;
                        animation: spin 8s linear infinite;
                    }
                    .hero-stars {
                        position: absolute;
                        inset: 0;
                        background-image: radial-gradient(1px 1px at 20% 30%, #fff, transparent),
                            radial-gradient(1px 1px at 70% 20%, #fff, transparent),
                            radial-gradient(1px 1px at 40% 70%, #fff, transparent),
                            radial-gradient(1px 1px at 85% 60%, #fff, transparent);
                        opacity: 0.6;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        text-align: center;
                        padding: 0 1rem;
                        will-change: opacity, transform;
                    }
                    .hero-title {
                        font-size: clamp(2.5rem, 8vw, 4.5rem);
                        font-weight: 900;
                        margin-bottom: 1rem;
                        animation: rise-in 0.8s ease-out 0.2s both;
                    }
                    .hero-tagline {
                        font-family: "Exo", sans-serif;
                        font-size: clamp(1.25rem, 3vw, 1.5rem);
                        color: #d1d5db;
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                        animation: rise-in 0.8s ease-out 0.4s both;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                        animation: rise-in 0.8s ease-out 0.6s both;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid #00F0FF;
                        border-radius: 9999px;
                        display: flex;
                        justify-content: center;
                        padding-top: 0.25rem;
                        animation: bob 2s ease-in-out infinite;
                    }
                    .scroll-indicator span {
                        width: 0.25rem;
                        height: 0.5rem;
                        background: #00F0FF;
                        border-radius: 9999px;
                        animation: nudge 1.5s ease-in-out infinite;
                    }
                    @keyframes floor-scroll {
                        from { background-position: 0 0; }
                        to { background-position: 0 40px; }
                    }
                    @keyframes bob {
                        0%, 100% { transform: translate(-50%, 0); opacity: 0.4; }
                        50% { transform: translate(-50%, 10px); opacity: 1; }
                    }
                    @keyframes nudge {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(4px); }
                    }
                "#}
            </style>
            <div class="hero-backdrop" aria-hidden="true">
                <div class="hero-stars"></div>
                <div class="hero-orb"></div>
                <div class="hero-floor"></div>
            </div>

            <div class="hero-content" style={transform.style()}>
                <GlitchText text="CYBER ACADEMY" tag="h1" level={GlitchLevel::Medium} class="hero-title" />
                <h2 class="hero-tagline">
                    <span class="neon-text">{"Pioneering"}</span>
                    {" the future of education with cutting-edge technology and"}
                    <span class="neon-text-pink">{" immersive"}</span>
                    {" learning experiences"}
                </h2>
                <div class="hero-actions">
                    <NeonButton href="#courses">{"Explore Courses"}</NeonButton>
                    <NeonButton href="#about" color={GlowColor::Pink}>{"Learn More"}</NeonButton>
                </div>
            </div>

            <div class="scroll-indicator" aria-hidden="true"><span></span></div>
        </section>
    }
}
