use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::use_window_size;

use crate::components::glitch_text::GlitchText;
use crate::components::neon_card::NeonCard;
use crate::components::reveal::Reveal;
use crate::widgets::carousel::{window_size_for, Carousel, CarouselAction};
use crate::widgets::catalog::{Event, EVENTS};

#[derive(Properties, PartialEq)]
struct EventCardProps {
    event: &'static Event,
}

#[function_component(EventCard)]
fn event_card(props: &EventCardProps) -> Html {
    let event = props.event;
    html! {
        <NeonCard glow={event.color} class="event-card">
            <div class="event-image">
                <img src={event.image_url} alt={event.title} loading="lazy" />
            </div>
            <h3 class="card-title">{event.title}</h3>
            <p class="card-text">{event.description}</p>
            <ul class="event-meta">
                <li><span class="event-meta-icon">{"📅"}</span>{event.date}</li>
                <li><span class="event-meta-icon">{"🕒"}</span>{event.time}</li>
                <li><span class="event-meta-icon">{"📍"}</span>{event.location}</li>
            </ul>
        </NeonCard>
    }
}

#[function_component(EventsSection)]
pub fn events_section() -> Html {
    // One width snapshot per render; everything below derives from it.
    let (viewport_width, _) = use_window_size();
    let carousel = use_reducer(|| Carousel::new(EVENTS.len(), viewport_width));

    {
        let carousel = carousel.dispatcher();
        use_effect_with_deps(
            move |window: &usize| {
                debug!("event carousel window -> {}", window);
                carousel.dispatch(CarouselAction::Resize(viewport_width));
                || ()
            },
            window_size_for(viewport_width),
        );
    }

    let on_prev = {
        let carousel = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Retreat))
    };
    let on_next = {
        let carousel = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Advance))
    };

    let window = carousel.window_size();
    let at_start = carousel.at_start();
    let at_end = carousel.at_end();
    let active_page = carousel.active_page();
    let track_style = format!(
        "transform: translateX({:.4}%); --per-view: {};",
        carousel.track_offset_percent(),
        window
    );
    let shown: Vec<u32> = carousel.visible_window(EVENTS).iter().map(|e| e.id).collect();

    html! {
        <section id="events" class="section events">
            <style>
                {r#"
                    .carousel {
                        position: relative;
                    }
                    .carousel-viewport {
                        overflow: hidden;
                    }
                    .carousel-track {
                        display: flex;
                        transition: transform 0.5s cubic-bezier(0.22, 1, 0.36, 1);
                    }
                    .carousel-slide {
                        flex: 0 0 calc(100% / var(--per-view));
                        padding: 0 0.75rem;
                        box-sizing: border-box;
                    }
                    .carousel-slide[aria-hidden="true"] .neon-card {
                        pointer-events: none;
                    }
                    .event-card {
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                    }
                    .event-image {
                        position: relative;
                        height: 12rem;
                        margin-bottom: 1rem;
                        overflow: hidden;
                        border-radius: 0.375rem;
                    }
                    .event-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }
                    .event-image img:hover { transform: scale(1.1); }
                    .event-image::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, #0A0A0F, transparent);
                        opacity: 0.7;
                        pointer-events: none;
                    }
                    .event-meta {
                        margin-top: auto;
                        font-size: 0.875rem;
                        color: #d1d5db;
                    }
                    .event-meta li {
                        display: flex;
                        align-items: center;
                        margin-top: 0.5rem;
                    }
                    .event-meta-icon {
                        margin-right: 0.5rem;
                        color: #FF3864;
                    }
                    .carousel-nav {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 10;
                        width: 2.75rem;
                        height: 2.75rem;
                        border-radius: 9999px;
                        background: rgba(16, 16, 56, 0.8);
                        border: 1px solid #00F0FF;
                        box-shadow: 0 0 10px rgba(0, 240, 255, 0.5);
                        color: #00F0FF;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .carousel-nav:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .carousel-prev { left: 0; margin-left: -1.25rem; }
                    .carousel-next { right: 0; margin-right: -1.25rem; }
                    .carousel-indicators {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 2rem;
                    }
                    .carousel-dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 9999px;
                        border: none;
                        background: #4b5563;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .carousel-dot.active {
                        width: 1.5rem;
                        background: #FF3864;
                    }
                "#}
            </style>
            <div class="cyber-grid-overlay"></div>
            <div class="container">
                <div class="section-header">
                    <Reveal>
                        <span class="eyebrow text-pink">{"What's Happening"}</span>
                    </Reveal>
                    <Reveal delay={0.1}>
                        <GlitchText text="UPCOMING EVENTS" class="section-title" />
                    </Reveal>
                    <Reveal delay={0.2}>
                        <p class="section-lead">
                            {"Explore our calendar of innovative events, workshops, and industry conferences designed to expand your horizons and connect you with like-minded innovators."}
                        </p>
                    </Reveal>
                </div>

                <div class="carousel">
                    <div class="carousel-viewport">
                        <div class="carousel-track" style={track_style}>
                            { for EVENTS.iter().map(|event| html! {
                                <div
                                    key={event.id}
                                    class="carousel-slide"
                                    aria-hidden={(!shown.contains(&event.id)).to_string()}
                                >
                                    <EventCard {event} />
                                </div>
                            }) }
                        </div>
                    </div>

                    <button
                        class="carousel-nav carousel-prev"
                        onclick={on_prev}
                        disabled={at_start}
                        aria-label="Previous event"
                    >
                        {"‹"}
                    </button>
                    <button
                        class="carousel-nav carousel-next"
                        onclick={on_next}
                        disabled={at_end}
                        aria-label="Next event"
                    >
                        {"›"}
                    </button>
                </div>

                <div class="carousel-indicators">
                    { for (0..carousel.page_count()).map(|page| {
                        let onclick = {
                            let carousel = carousel.dispatcher();
                            Callback::from(move |_: MouseEvent| {
                                carousel.dispatch(CarouselAction::JumpToPage(page as i64))
                            })
                        };
                        html! {
                            <button
                                key={page}
                                class={classes!("carousel-dot", (page == active_page).then(|| "active"))}
                                {onclick}
                                aria-label={format!("Go to slide {}", page + 1)}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
