use yew::prelude::*;

use crate::{base::Base, components::AddItemForm, styles};

#[function_component(AddItem)]
pub fn add_item() -> Html {
    html! {
        <Base>
            <div class={styles::CONTAINER_SM}>
                <div class={styles::CARD}>
                    <h1 class={styles::TEXT_H2}>{"Add an extension"}</h1>
                    <AddItemForm />
                </div>
            </div>
        </Base>
    }
}
