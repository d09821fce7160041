use shared::theme::Theme;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ThemeToggle;
use crate::{styles, Route};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

/// Page shell: navigation and the theme toggle. The theme itself belongs to
/// `App` and is read from context.
#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let theme = use_context::<UseStateHandle<Theme>>();
    if theme.is_none() {
        log::warn!("Base rendered without a theme context");
    }

    let current = theme.as_deref().copied().unwrap_or_default();
    let toggle_theme = Callback::from(move |_: ()| {
        if let Some(theme) = &theme {
            theme.set(theme.toggled());
        }
    });

    html! {
        <>
            <nav class={styles::NAV}>
                <div class={styles::NAV_INNER}>
                    <div class={styles::NAV_CONTENT}>
                        <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>{"Extensions"}</Link<Route>>
                        <div class={styles::NAV_ITEMS}>
                            <Link<Route> to={Route::Add} classes={styles::NAV_LINK}>{"Add"}</Link<Route>>
                            <Link<Route> to={Route::Signup} classes={styles::NAV_LINK}>{"Sign up"}</Link<Route>>
                            <ThemeToggle theme={current} on_toggle={toggle_theme} />
                        </div>
                    </div>
                </div>
            </nav>
            <main class="pt-20">
                {props.children.clone()}
            </main>
        </>
    }
}
