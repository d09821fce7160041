pub mod base;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod styles;

use shared::theme::Theme;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{add_item::AddItem, home::Home, signup::Signup};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Home,
   #[at("/signup")] Signup,
   #[at("/add")] Add,
   #[not_found]
   #[at("/404")] NotFound,
}

/// The theme is held above the router so a route change keeps it.
#[function_component(App)]
pub fn app() -> Html {
    let theme = use_state_eq(Theme::default);

    {
        use_effect_with(*theme, move |theme| {
            if let Err(e) = dom::apply_theme(*theme) {
                log::warn!("Theme not applied: {}", e);
            }
            || ()
        });
    }

    html! {
        <ContextProvider<UseStateHandle<Theme>> context={theme}>
            <BrowserRouter>
                <div class="min-h-screen w-full">
                    <div class="mx-auto">
                        <Switch<Route> render={switch} />
                    </div>
                </div>
            </BrowserRouter>
        </ContextProvider<UseStateHandle<Theme>>>
    }
}

/// Keying the container by path remounts it on navigation, which replays the
/// enter transition.
pub fn switch(route: Route) -> Html {
   let page = match &route {
       Route::Home | Route::NotFound => html! { <Home /> },
       Route::Signup => html! { <Signup /> },
       Route::Add => html! { <AddItem /> },
   };

   html! {
       <div id={styles::PAGE_CONTAINER_ID} key={route.to_path()} class={styles::PAGE_TRANSITION}>
           {page}
       </div>
   }
}
