use yew::prelude::*;

use crate::components::glitch_text::GlitchText;
use crate::components::neon_card::NeonCard;
use crate::components::reveal::{Reveal, RevealFrom};
use crate::widgets::catalog::GlowColor;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    color: GlowColor,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "💡",
        title: "Innovative Curriculum",
        description: "Our programs blend cutting-edge technology with forward-thinking educational approaches.",
        color: GlowColor::Cyan,
    },
    Feature {
        icon: "🛡",
        title: "Industry Partnerships",
        description: "Connect with leading tech companies and gain real-world experience through our partnerships.",
        color: GlowColor::Pink,
    },
    Feature {
        icon: "👥",
        title: "Expert Faculty",
        description: "Learn from industry professionals and academic experts at the forefront of their fields.",
        color: GlowColor::Purple,
    },
    Feature {
        icon: "🏆",
        title: "Future-Ready Skills",
        description: "Develop the technical and creative skills needed to thrive in tomorrow's digital landscape.",
        color: GlowColor::Yellow,
    },
];

const HIGHLIGHTS: [&str; 4] = [
    "Immersive Learning",
    "Advanced Technology",
    "Industry Experts",
    "Global Community",
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="section about">
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2.5rem;
                        margin-bottom: 4rem;
                    }
                    .about-image {
                        position: relative;
                        overflow: hidden;
                        border-radius: 0.5rem;
                        aspect-ratio: 4 / 3;
                    }
                    .about-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .about-image::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(90deg, #101038, transparent 60%);
                        opacity: 0.6;
                    }
                    .about-copy {
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                    }
                    .about-copy h3 {
                        font-family: "Orbitron", sans-serif;
                        font-size: 1.5rem;
                        color: #00F0FF;
                        margin-bottom: 1rem;
                    }
                    .about-copy p {
                        color: #d1d5db;
                        margin-bottom: 1rem;
                    }
                    .highlights {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .highlights li {
                        display: flex;
                        align-items: center;
                        font-size: 0.875rem;
                    }
                    .highlights li::before {
                        content: '';
                        width: 0.5rem;
                        height: 0.5rem;
                        margin-right: 0.5rem;
                        border-radius: 50%;
                        background: #00F0FF;
                    }
                    .feature-card {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }
                    .feature-icon {
                        font-size: 2rem;
                        padding: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    @media (min-width: 768px) {
                        .about-grid { grid-template-columns: 1fr 1fr; }
                    }
                "#}
            </style>
            <div class="cyber-grid-overlay"></div>
            <div class="container narrow">
                <div class="section-header">
                    <Reveal>
                        <span class="eyebrow text-cyan">{"Who We Are"}</span>
                    </Reveal>
                    <Reveal delay={0.1}>
                        <GlitchText text="REDEFINING EDUCATION" class="section-title" />
                    </Reveal>
                    <Reveal delay={0.2}>
                        <p class="section-lead">
                            {"Cyber Academy is where technology and education converge, creating an immersive learning environment that prepares students for the digital frontier of tomorrow."}
                        </p>
                    </Reveal>
                </div>

                <div class="about-grid">
                    <Reveal from={RevealFrom::Left} delay={0.1}>
                        <div class="about-image neon-border">
                            <img
                                src="https://images.pexels.com/photos/2599244/pexels-photo-2599244.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"
                                alt="Futuristic classroom with advanced technology"
                                loading="lazy"
                            />
                        </div>
                    </Reveal>
                    <div class="about-copy">
                        <Reveal delay={0.2}>
                            <h3>{"Our Mission"}</h3>
                        </Reveal>
                        <Reveal delay={0.3}>
                            <p>
                                {"At Cyber Academy, we're on a mission to revolutionize education through technology. We believe learning should be an immersive, interactive experience that prepares students for the challenges of tomorrow's digital landscape."}
                            </p>
                        </Reveal>
                        <Reveal delay={0.4}>
                            <p>
                                {"Our cutting-edge curriculum combines traditional academic excellence with the latest advancements in virtual reality, artificial intelligence, and digital collaboration tools. We're not just teaching subjects, we're creating the next generation of innovators, problem-solvers, and digital pioneers."}
                            </p>
                        </Reveal>
                        <Reveal delay={0.5}>
                            <ul class="highlights">
                                { for HIGHLIGHTS.iter().map(|item| html! { <li>{*item}</li> }) }
                            </ul>
                        </Reveal>
                    </div>
                </div>

                <div class="card-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <Reveal delay={0.1 * (index + 1) as f64}>
                            <NeonCard glow={feature.color} class="feature-card">
                                <div class={classes!("feature-icon", format!("text-{}", feature.color.as_str()))}>
                                    {feature.icon}
                                </div>
                                <h3 class="card-title">{feature.title}</h3>
                                <p class="card-text">{feature.description}</p>
                            </NeonCard>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
