use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::widgets::catalog::GlowColor;

#[derive(Properties, PartialEq)]
pub struct NeonInputProps {
    pub name: AttrValue,
    pub value: AttrValue,
    /// Emits `(name, value)` on every keystroke.
    pub on_change: Callback<(String, String)>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub multiline: bool,
    #[prop_or(4)]
    pub rows: u32,
    #[prop_or(GlowColor::Cyan)]
    pub color: GlowColor,
}

#[function_component(NeonInput)]
pub fn neon_input(props: &NeonInputProps) -> Html {
    let field_class = classes!("neon-input", format!("glow-{}", props.color.as_str()));
    let name = props.name.to_string();

    let label = props.label.as_ref().map(|label| {
        html! {
            <label for={props.name.clone()} class="neon-input-label">
                {label}
                if props.required {
                    <span class="required-mark">{"*"}</span>
                }
            </label>
        }
    });

    let field = if props.multiline {
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit((name.clone(), area.value()));
        });
        html! {
            <textarea
                id={props.name.clone()}
                name={props.name.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                required={props.required}
                rows={props.rows.to_string()}
                class={field_class}
                {oninput}
            />
        }
    } else {
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((name.clone(), input.value()));
        });
        html! {
            <input
                type={props.input_type.clone()}
                id={props.name.clone()}
                name={props.name.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                required={props.required}
                class={field_class}
                {oninput}
            />
        }
    };

    html! {
        <div class="neon-field">
            { label.unwrap_or_default() }
            { field }
        </div>
    }
}
