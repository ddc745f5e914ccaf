use yew::prelude::*;

use crate::hooks::use_in_view;

/// Where revealed content slides in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
    Scale,
}

impl RevealFrom {
    fn class(&self) -> &'static str {
        match self {
            RevealFrom::Below => "from-below",
            RevealFrom::Left => "from-left",
            RevealFrom::Right => "from-right",
            RevealFrom::Scale => "from-scale",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    /// Seconds before the transition starts once visible.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub from: RevealFrom,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.from.class(), visible.then(|| "visible"), props.class.clone())}
            style={format!("transition-delay: {:.2}s;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}
