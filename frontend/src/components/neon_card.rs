use yew::prelude::*;

use crate::widgets::catalog::GlowColor;

#[derive(Properties, PartialEq)]
pub struct NeonCardProps {
    pub children: Children,
    #[prop_or(GlowColor::Cyan)]
    pub glow: GlowColor,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub hover_lift: bool,
}

#[function_component(NeonCard)]
pub fn neon_card(props: &NeonCardProps) -> Html {
    html! {
        <div class={classes!(
            "neon-card",
            format!("glow-{}", props.glow.as_str()),
            props.hover_lift.then(|| "hover-lift"),
            props.class.clone(),
        )}>
            { for props.children.iter() }
        </div>
    }
}
