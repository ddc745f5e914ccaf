use web_sys::js_sys::Math;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GlitchLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl GlitchLevel {
    /// Chance that a given mount glitches at all.
    fn probability(&self) -> f64 {
        match self {
            GlitchLevel::Low => 0.2,
            GlitchLevel::Medium => 0.4,
            GlitchLevel::High => 0.7,
        }
    }

    /// Pause between glitch bursts, in seconds.
    fn repeat_delay(&self) -> u32 {
        match self {
            GlitchLevel::Low => 8,
            GlitchLevel::Medium => 5,
            GlitchLevel::High => 3,
        }
    }

    /// Peak opacity of the offset color layers.
    fn intensity(&self) -> f64 {
        match self {
            GlitchLevel::Low => 0.2,
            GlitchLevel::Medium => 0.5,
            GlitchLevel::High => 0.9,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GlitchTextProps {
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("h2"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub level: GlitchLevel,
    #[prop_or_default]
    pub class: Classes,
}

/// Heading with cyan and pink offset copies that flicker now and then.
#[function_component(GlitchText)]
pub fn glitch_text(props: &GlitchTextProps) -> Html {
    let level = props.level;
    let glitching = use_state(move || Math::random() < level.probability());

    let layer_style = format!(
        "--glitch-peak: {}; animation-delay: {}s;",
        level.intensity(),
        level.repeat_delay()
    );

    html! {
        <@{props.tag.to_string()}
            class={classes!("glitch-text", (*glitching).then(|| "glitching"), props.class.clone())}
            data-text={props.text.clone()}
        >
            <span class="glitch-base">{&props.text}</span>
            <span class="glitch-layer glitch-cyan" style={layer_style.clone()} aria-hidden="true">{&props.text}</span>
            <span class="glitch-layer glitch-pink" style={layer_style} aria-hidden="true">{&props.text}</span>
        </@>
    }
}
