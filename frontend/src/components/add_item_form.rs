use shared::feedback::added_item_message;
use web_sys::{HtmlFormElement, SubmitEvent};
use yew::prelude::*;

use crate::dom;
use crate::hooks::use_form_state;
use crate::styles;

/// Stays on the page: the submission is replaced by a local confirmation.
#[function_component(AddItemForm)]
pub fn add_item_form() -> Html {
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let form_state = use_form_state();

    let onsubmit = {
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let set_feedback = form_state.set_feedback.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = match dom::input_value(&name_ref, "itemName") {
                Ok(name) => name,
                Err(err) => {
                    log::warn!("Add item skipped: {}", err);
                    return;
                }
            };

            log::info!("Item added locally: {}", name);
            set_feedback.emit(added_item_message(&name));
            if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                form.reset();
            }
        })
    };

    html! {
        <form id="addForm" ref={form_ref} class={styles::FORM} {onsubmit}>
            <label for="itemName" class={styles::TEXT_LABEL}>{"Item name"}</label>
            <input ref={name_ref} id="itemName" name="itemName" type="text" class={styles::INPUT} />
            <button type="submit" class={styles::BUTTON_PRIMARY}>{"Add"}</button>
            <p id="feedback" class={styles::TEXT_SUCCESS}>{form_state.feedback.clone()}</p>
        </form>
    }
}
