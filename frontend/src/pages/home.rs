use yew::prelude::*;
use yew_router::prelude::*;

use crate::{base::Base, styles, Route};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Base>
            <div class={styles::CONTAINER_SM}>
                <div class={styles::CARD}>
                    <h1 class={styles::TEXT_H2}>{"Browser extensions"}</h1>
                    <p class={styles::TEXT_BODY}>
                        {"Share the extensions you rely on. "}
                        <Link<Route> to={Route::Signup} classes={styles::LINK}>{"Create an account"}</Link<Route>>
                        {" or "}
                        <Link<Route> to={Route::Add} classes={styles::LINK}>{"add one now"}</Link<Route>>
                        {"."}
                    </p>
                </div>
            </div>
        </Base>
    }
}
