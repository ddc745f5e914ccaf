use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <a href="#home" class={classes!("logo", props.class.clone())}>
            <span class="logo-mark">
                <span class="logo-bolt">{"⚡"}</span>
                <span class="logo-pulse"></span>
            </span>
            <span class="logo-text">
                <span class="logo-cyber">{"CYBER"}</span>
                <span class="logo-academy">{"ACADEMY"}</span>
            </span>
        </a>
    }
}
