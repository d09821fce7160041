use yew::prelude::*;

#[derive(Clone)]
pub struct FormState {
    pub feedback: String,
    pub set_feedback: Callback<String>,
}

#[hook]
pub fn use_form_state() -> FormState {
    let feedback = use_state(String::new);

    let set_feedback = {
        let feedback = feedback.clone();
        Callback::from(move |msg: String| feedback.set(msg))
    };

    FormState {
        feedback: (*feedback).clone(),
        set_feedback,
    }
}
