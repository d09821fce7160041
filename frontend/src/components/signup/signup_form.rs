use shared::validation::validate_signup;
use web_sys::SubmitEvent;
use yew::prelude::*;

use super::{PasswordChecklist, RoleSelect, StrengthMeter};
use crate::config::load_signup_config;
use crate::dom;
use crate::hooks::{use_checklist_visibility, use_password_validation, use_step_sequence};
use crate::styles;

const STEP_COUNT: usize = 3;

fn step_callback<E: 'static>(on_step_input: &Callback<usize>, index: usize) -> Callback<E> {
    let on_step_input = on_step_input.clone();
    Callback::from(move |_: E| on_step_input.emit(index))
}

#[function_component(SignupForm)]
pub fn signup_form() -> Html {
    let config = use_memo((), |_| load_signup_config());
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();

    let (validation, validate) = use_password_validation(config.min_password_length);
    let checklist = use_checklist_visibility(
        [password_ref.clone(), confirm_ref.clone()],
        config.checklist_hide_delay_ms,
    );
    let steps = use_step_sequence(STEP_COUNT);

    let oninput_password = {
        let password_ref = password_ref.clone();
        let confirm_ref = confirm_ref.clone();
        Callback::from(move |_: InputEvent| {
            let values = dom::input_value(&password_ref, "password").and_then(|password| {
                dom::input_value(&confirm_ref, "confirm_password")
                    .map(|confirmation| (password, confirmation))
            });
            match values {
                Ok(values) => validate.emit(values),
                Err(e) => log::warn!("Password validation skipped: {}", e),
            }
        })
    };

    let onsubmit = {
        let password_ref = password_ref.clone();
        let confirm_ref = confirm_ref.clone();
        let min_length = config.min_password_length;
        Callback::from(move |e: SubmitEvent| {
            let password = dom::input_value(&password_ref, "password").unwrap_or_default();
            let confirmation = dom::input_value(&confirm_ref, "confirm_password").unwrap_or_default();
            if let Err(error) = validate_signup(&password, &confirmation, min_length) {
                e.prevent_default();
                log::info!("Signup submission blocked: {}", error.code);
            }
        })
    };

    let step_class = |index: usize| {
        classes!(
            "form-step",
            steps.is_active(index).then(|| config.classes.step_active.clone())
        )
    };

    html! {
        <form id="signupForm" action="/signup" method="post" class={styles::FORM} {onsubmit}>
            <section
                ref={steps.step_refs[0].clone()}
                class={step_class(0)}
                oninput={step_callback::<InputEvent>(&steps.on_step_input, 0)}
                onchange={step_callback::<Event>(&steps.on_step_input, 0)}
            >
                <h2 class={styles::TEXT_H3}>{"About you"}</h2>
                <label for="name" class={styles::TEXT_LABEL}>{"Name"}</label>
                <input id="name" name="name" type="text" class={styles::INPUT} autocomplete="name" />
                <label for="email" class={styles::TEXT_LABEL}>{"Email"}</label>
                <input id="email" name="email" type="email" class={styles::INPUT} autocomplete="email" />
            </section>

            <section
                ref={steps.step_refs[1].clone()}
                class={step_class(1)}
                oninput={step_callback::<InputEvent>(&steps.on_step_input, 1)}
                onchange={step_callback::<Event>(&steps.on_step_input, 1)}
            >
                <h2 class={styles::TEXT_H3}>{"Your role"}</h2>
                <RoleSelect classes={config.classes.clone()} />
            </section>

            <section ref={steps.step_refs[2].clone()} class={step_class(2)}>
                <h2 class={styles::TEXT_H3}>{"Choose a password"}</h2>
                <label for="password" class={styles::TEXT_LABEL}>{"Password"}</label>
                <input
                    ref={password_ref}
                    id="password"
                    name="password"
                    type="password"
                    class={styles::INPUT}
                    autocomplete="new-password"
                    oninput={oninput_password.clone()}
                    onfocus={checklist.on_focus.clone()}
                    onblur={checklist.on_blur.clone()}
                />
                <StrengthMeter strength={validation.rules.strength()} />

                <label for="confirm_password" class={styles::TEXT_LABEL}>{"Confirm password"}</label>
                <input
                    ref={confirm_ref}
                    id="confirm_password"
                    name="confirm_password"
                    type="password"
                    class={styles::INPUT}
                    autocomplete="new-password"
                    oninput={oninput_password}
                    onfocus={checklist.on_focus}
                    onblur={checklist.on_blur}
                />

                <PasswordChecklist
                    checklist={validation.checklist}
                    visibility={checklist.visibility}
                    classes={config.classes.clone()}
                    min_length={config.min_password_length}
                />

                <button type="submit" class={styles::AUTH_BUTTON} disabled={!validation.is_valid()}>
                    {"Create Account"}
                </button>
            </section>
        </form>
    }
}
