use shared::theme::Theme;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());
    let icon = if props.theme.is_dark() { "☀️" } else { "🌙" };

    html! {
        <button
            id="toggleBtn"
            type="button"
            class={styles::BUTTON_ICON}
            aria-label={props.theme.toggle_label()}
            title={props.theme.toggle_label()}
            {onclick}
        >
            {icon}
        </button>
    }
}
