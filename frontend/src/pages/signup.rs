use yew::prelude::*;

use crate::{base::Base, components::SignupForm, styles};

#[function_component(Signup)]
pub fn signup() -> Html {
    html! {
        <Base>
            <div class={styles::CONTAINER_SM}>
                <div class={styles::CARD}>
                    <h1 class={styles::TEXT_H2}>{"Sign up"}</h1>
                    <SignupForm />
                </div>
            </div>
        </Base>
    }
}
