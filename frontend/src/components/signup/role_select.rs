use shared::config::ClassNames;
use shared::role::{Role, ROLE_OPTIONS};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::styles;

const RECIPIENT_CATEGORIES: [&str; 3] = ["Food", "Clothing", "Housing"];

#[derive(Properties, PartialEq)]
pub struct RoleSelectProps {
    pub classes: ClassNames,
}

/// Role picker plus the recipient-only category section it controls.
#[function_component(RoleSelect)]
pub fn role_select(props: &RoleSelectProps) -> Html {
    let role = use_state_eq(Role::default);

    let onchange = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else {
                log::warn!("Role change from a non-select target ignored");
                return;
            };
            role.set(Role::from_value(&select.value()));
        })
    };

    let categories_class = role.categories_class(&props.classes).map(str::to_string);

    html! {
        <>
            <label for="role" class={styles::TEXT_LABEL}>{"I am signing up as"}</label>
            <select id="role" name="role" class={styles::INPUT} {onchange}>
                <option value="" selected=true disabled=true>{"Choose a role"}</option>
                { for ROLE_OPTIONS.iter().map(|option| html! {
                    <option value={*option}>{*option}</option>
                }) }
            </select>

            <fieldset id="recipient-categories" class={classes!("mt-4", categories_class)}>
                <legend class={styles::TEXT_LABEL}>{"What do you need help with?"}</legend>
                { for RECIPIENT_CATEGORIES.iter().map(|category| html! {
                    <label class="flex items-center space-x-2">
                        <input type="checkbox" name="categories" value={*category} />
                        <span class={styles::TEXT_SECONDARY}>{*category}</span>
                    </label>
                }) }
            </fieldset>
        </>
    }
}
