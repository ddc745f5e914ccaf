use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::glitch_text::GlitchText;
use crate::components::neon_button::NeonButton;
use crate::components::neon_input::NeonInput;
use crate::components::reveal::{Reveal, RevealFrom};
use crate::config::{CONTACT_SENT_DISPLAY_MS, CONTACT_SUBMIT_DELAY_MS};
use crate::widgets::contact::{ContactState, SubmitPhase};

const CONTACT_INFO: [(&str, &str, &str, &str); 3] = [
    ("✉", "Email Us", "admissions@cyberacademy.edu", "text-cyan"),
    ("📍", "Visit Us", "123 Tech Avenue, Neo City", "text-pink"),
    ("☎", "Call Us", "+1 (555) 123-4567", "text-purple"),
];

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let state = use_state(ContactState::default);
    // Latest state for the async submission, which outlives the render that started it.
    let latest = use_mut_ref(ContactState::default);
    *latest.borrow_mut() = (*state).clone();

    let on_change = {
        let state = state.clone();
        Callback::from(move |(field, value): (String, String)| {
            state.set(state.edit(&field, value));
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !state.form.is_complete() {
                warn!("contact form submitted with empty fields");
                return;
            }
            let Some(submitting) = state.submit() else {
                warn!("contact form submitted twice");
                return;
            };
            state.set(submitting.clone());

            let state = state.clone();
            let latest = latest.clone();
            spawn_local(async move {
                TimeoutFuture::new(CONTACT_SUBMIT_DELAY_MS).await;
                match serde_json::to_string(&submitting.form) {
                    Ok(json) => info!("contact message accepted: {}", json),
                    Err(e) => warn!("could not serialize contact message: {}", e),
                }
                state.set(submitting.delivered());

                TimeoutFuture::new(CONTACT_SENT_DISPLAY_MS).await;
                let current = latest.borrow().clone();
                if current.phase == SubmitPhase::Sent {
                    state.set(current.acknowledged());
                }
            });
        })
    };

    let form = &state.form;
    let submitting = state.phase == SubmitPhase::Submitting;

    html! {
        <section id="contact" class="section contact">
            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2.5rem;
                    }
                    .contact-info li {
                        display: flex;
                        margin-bottom: 2.5rem;
                    }
                    .contact-info-icon {
                        font-size: 1.5rem;
                        margin-right: 1rem;
                    }
                    .contact-info h3 {
                        font-family: "Orbitron", sans-serif;
                        font-size: 1.125rem;
                        margin-bottom: 0.25rem;
                    }
                    .contact-info p { color: #d1d5db; }
                    .map-placeholder {
                        position: relative;
                        height: 200px;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        background: #101038;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-family: "Orbitron", sans-serif;
                        color: #00F0FF;
                    }
                    .contact-panel {
                        background: rgba(16, 16, 56, 0.5);
                        backdrop-filter: blur(4px);
                        padding: 2rem;
                        border-radius: 0.5rem;
                        border: 1px solid #00F0FF;
                        box-shadow: 0 0 20px rgba(0, 240, 255, 0.3);
                    }
                    .contact-row {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1rem;
                    }
                    .contact-sent {
                        text-align: center;
                        padding: 2.5rem 0;
                        animation: pop 0.4s ease-out both;
                    }
                    .contact-sent-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        background: rgba(0, 240, 255, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                        color: #00F0FF;
                    }
                    .contact-sent h3 {
                        font-family: "Orbitron", sans-serif;
                        font-size: 1.5rem;
                        margin-bottom: 0.5rem;
                    }
                    .spinner {
                        display: inline-block;
                        width: 1.25rem;
                        height: 1.25rem;
                        margin-right: 0.75rem;
                        border: 3px solid rgba(255, 255, 255, 0.25);
                        border-top-color: #fff;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                        vertical-align: middle;
                    }
                    @media (min-width: 768px) {
                        .contact-row { grid-template-columns: 1fr 1fr; }
                    }
                    @media (min-width: 1024px) {
                        .contact-grid { grid-template-columns: 2fr 3fr; }
                    }
                "#}
            </style>
            <div class="cyber-grid-overlay"></div>
            <div class="container">
                <div class="section-header">
                    <Reveal>
                        <span class="eyebrow text-green">{"Get In Touch"}</span>
                    </Reveal>
                    <Reveal delay={0.1}>
                        <GlitchText text="CONTACT US" class="section-title" />
                    </Reveal>
                    <Reveal delay={0.2}>
                        <p class="section-lead">
                            {"Have questions about our programs, admissions, or events? Reach out to our team, and we'll be happy to assist you."}
                        </p>
                    </Reveal>
                </div>

                <div class="contact-grid">
                    <Reveal from={RevealFrom::Left} delay={0.3}>
                        <ul class="contact-info">
                            { for CONTACT_INFO.iter().map(|(icon, title, content, color)| html! {
                                <li>
                                    <span class={classes!("contact-info-icon", *color)}>{*icon}</span>
                                    <div>
                                        <h3>{*title}</h3>
                                        <p>{*content}</p>
                                    </div>
                                </li>
                            }) }
                        </ul>
                        <div class="map-placeholder neon-border">
                            <div class="cyber-grid-overlay faint"></div>
                            <p>{"Interactive Map"}</p>
                        </div>
                    </Reveal>

                    <Reveal from={RevealFrom::Right} delay={0.3}>
                        <div class="contact-panel">
                            if state.phase == SubmitPhase::Sent {
                                <div class="contact-sent">
                                    <div class="contact-sent-icon">{"➤"}</div>
                                    <h3>{"Message Sent!"}</h3>
                                    <p class="card-text">{"Thank you for reaching out. We'll get back to you shortly."}</p>
                                </div>
                            } else {
                                <form onsubmit={on_submit}>
                                    <div class="contact-row">
                                        <NeonInput
                                            name="name"
                                            label="Name"
                                            placeholder="Your Name"
                                            value={form.name.clone()}
                                            required={true}
                                            on_change={on_change.clone()}
                                        />
                                        <NeonInput
                                            name="email"
                                            input_type="email"
                                            label="Email"
                                            placeholder="Your Email"
                                            value={form.email.clone()}
                                            required={true}
                                            on_change={on_change.clone()}
                                        />
                                    </div>
                                    <NeonInput
                                        name="subject"
                                        label="Subject"
                                        placeholder="Subject"
                                        value={form.subject.clone()}
                                        required={true}
                                        on_change={on_change.clone()}
                                    />
                                    <NeonInput
                                        name="message"
                                        label="Message"
                                        placeholder="Your Message"
                                        value={form.message.clone()}
                                        required={true}
                                        multiline={true}
                                        rows={5}
                                        {on_change}
                                    />
                                    <div class="contact-submit">
                                        <NeonButton button_type="submit" full_width={true} disabled={submitting}>
                                            if submitting {
                                                <span class="spinner"></span>
                                                {"Processing..."}
                                            } else {
                                                {"Send Message ➤"}
                                            }
                                        </NeonButton>
                                    </div>
                                </form>
                            }
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
