use yew::prelude::*;

use crate::components::glitch_text::GlitchText;
use crate::components::reveal::Reveal;
use crate::config::COUNTER_DURATION_MS;
use crate::hooks::{use_count_up, use_in_view};
use crate::widgets::catalog::GlowColor;

struct Stat {
    icon: &'static str,
    value: u32,
    label: &'static str,
    color: GlowColor,
    delay: f64,
}

const STATS: [Stat; 4] = [
    Stat { icon: "👥", value: 3500, label: "Students Enrolled", color: GlowColor::Cyan, delay: 0.1 },
    Stat { icon: "📚", value: 120, label: "Specialized Courses", color: GlowColor::Pink, delay: 0.2 },
    Stat { icon: "🏅", value: 98, label: "Awards Won", color: GlowColor::Purple, delay: 0.3 },
    Stat { icon: "💼", value: 250, label: "Industry Partners", color: GlowColor::Yellow, delay: 0.4 },
];

struct Milestone {
    year: &'static str,
    title: &'static str,
    description: &'static str,
}

const MILESTONES: [Milestone; 4] = [
    Milestone {
        year: "2020",
        title: "Academy Founding",
        description: "Cyber Academy was established with a vision to revolutionize technological education.",
    },
    Milestone {
        year: "2021",
        title: "First Graduating Class",
        description: "Our pioneering cohort of 150 students graduated with a 98% job placement rate.",
    },
    Milestone {
        year: "2023",
        title: "Global Expansion",
        description: "Opened satellite campuses in Tokyo, Berlin, and Singapore, bringing our curriculum worldwide.",
    },
    Milestone {
        year: "2024",
        title: "Industry Recognition",
        description: "Named 'Most Innovative Educational Institution' by the Global Tech Council.",
    },
];

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    icon: &'static str,
    value: u32,
    label: &'static str,
    color: GlowColor,
    delay: f64,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let count = use_count_up(props.value, COUNTER_DURATION_MS, in_view);
    let color = props.color.as_str();

    html! {
        <div
            ref={node}
            class={classes!("stat", "reveal", "from-below", in_view.then(|| "visible"))}
            style={format!("transition-delay: {:.1}s; --glow-rgb: {};", props.delay, props.color.rgb())}
        >
            <div class={classes!("stat-icon", format!("text-{}", color))}>{props.icon}</div>
            <div class="stat-figure">
                <span class={classes!("stat-value", format!("text-{}", color), in_view.then(|| "pulsing"))}>
                    {count}
                </span>
                <span class="stat-plus text-cyan">{"+"}</span>
            </div>
            <p class="stat-label">{props.label}</p>
        </div>
    }
}

#[function_component(AchievementsSection)]
pub fn achievements_section() -> Html {
    html! {
        <section class="section achievements">
            <style>
                {r#"
                    .achievements { background: #101038; }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2.5rem;
                    }
                    .stat { text-align: center; }
                    .stat-icon {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .stat-value, .stat-plus {
                        font-family: "Orbitron", sans-serif;
                        font-weight: 700;
                        font-size: clamp(2.25rem, 5vw, 3rem);
                    }
                    .stat-value.pulsing {
                        animation: stat-glow 2s ease-in-out infinite alternate;
                    }
                    .stat-label {
                        color: #d1d5db;
                        margin-top: 0.5rem;
                        font-size: 1.125rem;
                    }
                    @keyframes stat-glow {
                        from { text-shadow: 0 0 5px rgba(var(--glow-rgb), 0.7), 0 0 10px rgba(var(--glow-rgb), 0.5); }
                        to { text-shadow: 0 0 10px rgba(var(--glow-rgb), 0.9), 0 0 20px rgba(var(--glow-rgb), 0.7); }
                    }
                    .timeline {
                        position: relative;
                        margin-top: 6rem;
                    }
                    .timeline::before {
                        content: '';
                        position: absolute;
                        left: 50%;
                        top: 0;
                        height: 100%;
                        width: 0.25rem;
                        transform: translateX(-50%);
                        background: #00F0FF;
                        opacity: 0.3;
                    }
                    .milestone {
                        position: relative;
                        display: flex;
                        align-items: center;
                        margin-bottom: 3rem;
                    }
                    .milestone.even { flex-direction: row-reverse; }
                    .milestone-side { width: 50%; }
                    .milestone.even .milestone-card { margin-left: 3rem; }
                    .milestone.odd .milestone-card { margin-right: 3rem; }
                    .milestone-card {
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        background: rgba(16, 16, 56, 0.8);
                        border: 1px solid #00F0FF;
                    }
                    .milestone.even .milestone-card { border-color: #FF3864; }
                    .milestone-year {
                        position: absolute;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: #101038;
                        border: 4px solid #00F0FF;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 10;
                        font-family: "Orbitron", sans-serif;
                        font-weight: 700;
                        font-size: 0.7rem;
                        color: #00F0FF;
                    }
                    @media (min-width: 768px) {
                        .stats-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .stats-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                "#}
            </style>
            <div class="cyber-grid-overlay faint"></div>
            <div class="container">
                <div class="section-header">
                    <Reveal>
                        <span class="eyebrow text-yellow">{"Our Impact"}</span>
                    </Reveal>
                    <Reveal delay={0.1}>
                        <GlitchText text="ACHIEVEMENTS & MILESTONES" class="section-title" />
                    </Reveal>
                    <Reveal delay={0.2}>
                        <p class="section-lead">
                            {"Cyber Academy has established itself as a leader in technological education. Here's a glimpse of our impact and accomplishments over the years."}
                        </p>
                    </Reveal>
                </div>

                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <StatCounter
                            key={stat.label}
                            icon={stat.icon}
                            value={stat.value}
                            label={stat.label}
                            color={stat.color}
                            delay={stat.delay}
                        />
                    }) }
                </div>

                <Reveal delay={0.4} class="timeline">
                    { for MILESTONES.iter().enumerate().map(|(index, milestone)| {
                        let side = if index % 2 == 0 { "even" } else { "odd" };
                        html! {
                            <div class={classes!("milestone", side)}>
                                <div class="milestone-side">
                                    <div class="milestone-card">
                                        <h3 class="card-title">{milestone.title}</h3>
                                        <p class="card-text">{milestone.description}</p>
                                    </div>
                                </div>
                                <div class="milestone-year">{milestone.year}</div>
                                <div class="milestone-side"></div>
                            </div>
                        }
                    }) }
                </Reveal>
            </div>
        </section>
    }
}
