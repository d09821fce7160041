use gloo_timers::callback::Timeout;
use shared::checklist::{ChecklistVisibility, Visibility};
use yew::prelude::*;

use crate::dom;

#[derive(Clone)]
pub struct ChecklistVisibilityHandle {
    pub visibility: Visibility,
    pub on_focus: Callback<FocusEvent>,
    pub on_blur: Callback<FocusEvent>,
}

/// Shows the checklist while either password field has focus.
///
/// Blur arms a `Timeout`; replacing or dropping it cancels the previous one.
/// When it fires, focus is read from the document rather than from the event
/// that armed it.
#[hook]
pub fn use_checklist_visibility(fields: [NodeRef; 2], delay_ms: u32) -> ChecklistVisibilityHandle {
    let machine = use_mut_ref(ChecklistVisibility::default);
    let pending = use_mut_ref(|| None::<Timeout>);
    let visibility = use_state_eq(Visibility::default);

    let on_focus = {
        let machine = machine.clone();
        let pending = pending.clone();
        let visibility = visibility.clone();
        Callback::from(move |_: FocusEvent| {
            pending.borrow_mut().take();
            let state = machine.borrow_mut().on_focus();
            visibility.set(state);
        })
    };

    let on_blur = {
        let machine = machine.clone();
        let pending = pending.clone();
        let visibility = visibility.clone();
        Callback::from(move |_: FocusEvent| {
            let ticket = machine.borrow_mut().on_blur();
            let machine = machine.clone();
            let visibility = visibility.clone();
            let fields = fields.clone();
            let timeout = Timeout::new(delay_ms, move || {
                let focused = dom::focus_within(&fields);
                let state = machine.borrow_mut().on_hide_timer(ticket, focused);
                if state == Visibility::Hidden {
                    log::debug!("Password checklist hidden");
                }
                visibility.set(state);
            });
            *pending.borrow_mut() = Some(timeout);
        })
    };

    ChecklistVisibilityHandle {
        visibility: *visibility,
        on_focus,
        on_blur,
    }
}
