use log::debug;
use yew::prelude::*;

use crate::components::glitch_text::GlitchText;
use crate::components::neon_button::NeonButton;
use crate::components::neon_card::NeonCard;
use crate::components::reveal::{Reveal, RevealFrom};
use crate::widgets::catalog::{Course, GlowColor, COURSES};
use crate::widgets::facet_filter::{
    category_options, difficulty_options, filter, Facet, FilterState,
};

#[derive(Clone, Copy, PartialEq)]
enum FacetKind {
    Category,
    Difficulty,
}

#[derive(Properties, PartialEq)]
struct FacetButtonsProps {
    label: &'static str,
    kind: FacetKind,
    options: Vec<String>,
    selected: String,
    on_select: Callback<(FacetKind, String)>,
}

#[function_component(FacetButtons)]
fn facet_buttons(props: &FacetButtonsProps) -> Html {
    let active_class = match props.kind {
        FacetKind::Category => "facet-active-cyan",
        FacetKind::Difficulty => "facet-active-purple",
    };

    html! {
        <div class="facet-group">
            <span class="facet-label">{props.label}</span>
            { for props.options.iter().map(|option| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    let kind = props.kind;
                    let option = option.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit((kind, option.clone())))
                };
                let active = *option == props.selected;
                html! {
                    <button
                        key={option.clone()}
                        class={classes!("facet-button", active.then(|| active_class))}
                        {onclick}
                    >
                        {option}
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CourseCardProps {
    course: &'static Course,
    index: usize,
}

#[function_component(CourseCard)]
fn course_card(props: &CourseCardProps) -> Html {
    let hovered = use_state(|| false);
    let course = props.course;

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div
            class="course-card-wrapper pop-in"
            style={format!("animation-delay: {:.2}s;", props.index as f64 * 0.05)}
            {onmouseenter}
            {onmouseleave}
        >
            <NeonCard glow={course.color} class="course-card">
                <div class={classes!("course-icon", format!("text-{}", course.color.as_str()))}>
                    {course.icon.glyph()}
                </div>
                <h3 class="card-title">{course.title}</h3>
                <p class="card-text grow">{course.description}</p>
                <div class="course-meta">
                    <span class="difficulty-badge">{course.difficulty.as_str()}</span>
                    <span class="course-duration">{course.duration}</span>
                </div>
                <a href="#" class={classes!("course-details", (*hovered).then(|| "shown"))}>
                    {"View Course Details ›"}
                </a>
            </NeonCard>
        </div>
    }
}

#[function_component(CoursesSection)]
pub fn courses_section() -> Html {
    let filter_state = use_state(FilterState::default);

    let on_select = {
        let filter_state = filter_state.clone();
        Callback::from(move |(kind, label): (FacetKind, String)| {
            let facet = Facet::from_label(&label);
            let next = match kind {
                FacetKind::Category => filter_state.with_category(facet),
                FacetKind::Difficulty => filter_state.with_difficulty(facet),
            };
            debug!("course filter -> {:?}", next);
            filter_state.set(next);
        })
    };

    let visible = filter(COURSES, &filter_state);

    html! {
        <section id="courses" class="section courses">
            <style>
                {r#"
                    .facets {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        justify-content: center;
                        margin-bottom: 2.5rem;
                    }
                    .facet-group {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.5rem;
                    }
                    .facet-label {
                        font-family: "Orbitron", sans-serif;
                        font-size: 0.875rem;
                        margin: auto 0.5rem auto 0;
                    }
                    .facet-button {
                        padding: 0.25rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        background: transparent;
                        border: 1px solid #4b5563;
                        color: #d1d5db;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .facet-button:hover { border-color: #00F0FF; }
                    .facet-active-cyan {
                        background: #00F0FF;
                        color: #000;
                        box-shadow: 0 0 10px rgba(0, 240, 255, 0.5);
                    }
                    .facet-active-purple {
                        background: #6E0DFF;
                        color: #fff;
                        box-shadow: 0 0 10px rgba(110, 13, 255, 0.5);
                    }
                    .course-card {
                        display: flex;
                        flex-direction: column;
                        height: 100%;
                    }
                    .course-icon {
                        font-size: 2.25rem;
                        margin-bottom: 1rem;
                    }
                    .course-meta {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        font-size: 0.875rem;
                        margin-bottom: 1rem;
                    }
                    .difficulty-badge {
                        background: #101038;
                        color: #00F0FF;
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.25rem;
                    }
                    .course-duration { color: #9ca3af; }
                    .course-details {
                        font-family: "Orbitron", sans-serif;
                        font-size: 0.875rem;
                        color: #00F0FF;
                        opacity: 0;
                        transform: translateY(10px);
                        transition: opacity 0.2s, transform 0.2s;
                    }
                    .course-details.shown {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .courses-empty {
                        grid-column: 1 / -1;
                        text-align: center;
                        color: #9ca3af;
                    }
                    @media (min-width: 768px) {
                        .facets { flex-direction: row; }
                    }
                "#}
            </style>
            <div class="cyber-grid-overlay"></div>
            <div class="container">
                <div class="section-header">
                    <Reveal>
                        <span class="eyebrow text-purple">{"Our Programs"}</span>
                    </Reveal>
                    <Reveal delay={0.1}>
                        <GlitchText text="CUTTING-EDGE COURSES" class="section-title" />
                    </Reveal>
                    <Reveal delay={0.2}>
                        <p class="section-lead">
                            {"Expand your knowledge and master the technologies that will define the future. Our specialized programs are designed to keep you at the forefront of innovation."}
                        </p>
                    </Reveal>
                </div>

                <Reveal delay={0.3} class="facets">
                    <FacetButtons
                        label="Category:"
                        kind={FacetKind::Category}
                        options={category_options(COURSES)}
                        selected={filter_state.category.label().to_string()}
                        on_select={on_select.clone()}
                    />
                    <FacetButtons
                        label="Difficulty:"
                        kind={FacetKind::Difficulty}
                        options={difficulty_options()}
                        selected={filter_state.difficulty.label().to_string()}
                        {on_select}
                    />
                </Reveal>

                <div class="card-grid">
                    if visible.is_empty() {
                        <p class="courses-empty">{"No courses match these filters."}</p>
                    }
                    { for visible.iter().enumerate().map(|(index, course)| html! {
                        <CourseCard key={course.id} course={*course} {index} />
                    }) }
                </div>

                <Reveal from={RevealFrom::Below} class="section-cta">
                    <NeonButton href="#" color={GlowColor::Purple}>{"View All Programs"}</NeonButton>
                </Reveal>
            </div>
        </section>
    }
}
