use yew::prelude::*;

use crate::widgets::catalog::GlowColor;

#[derive(Properties, PartialEq)]
pub struct NeonButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or(GlowColor::Cyan)]
    pub color: GlowColor,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
}

/// Outlined button with a colored glow; renders an anchor when `href` is set.
#[function_component(NeonButton)]
pub fn neon_button(props: &NeonButtonProps) -> Html {
    let classes = classes!(
        "neon-button",
        format!("glow-{}", props.color.as_str()),
        props.full_width.then(|| "full-width"),
        props.class.clone(),
    );
    let content = html! {
        <>
            <span class="neon-button-label">{ for props.children.iter() }</span>
            <span class="neon-button-fill"></span>
        </>
    };

    match &props.href {
        Some(href) => html! {
            <a href={href.clone()} class={classes}>{content}</a>
        },
        None => {
            let onclick = props.onclick.clone().unwrap_or_else(|| Callback::from(|_| ()));
            html! {
                <button
                    type={props.button_type.clone()}
                    class={classes}
                    onclick={onclick}
                    disabled={props.disabled}
                >
                    {content}
                </button>
            }
        }
    }
}
