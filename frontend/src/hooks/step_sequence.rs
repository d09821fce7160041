use shared::steps::StepSequence;
use yew::prelude::*;

use crate::dom;

#[derive(Clone)]
pub struct StepSequenceHandle {
    pub current: usize,
    pub step_refs: Vec<NodeRef>,
    pub on_step_input: Callback<usize>,
}

impl StepSequenceHandle {
    pub fn is_active(&self, index: usize) -> bool {
        index < self.step_refs.len() && index <= self.current
    }
}

/// Drives `len` step sections. Each section reports its index through
/// `on_step_input` whenever one of its controls changes; the newly revealed
/// step is scrolled into view after it renders.
#[hook]
pub fn use_step_sequence(len: usize) -> StepSequenceHandle {
    let machine = use_mut_ref(|| StepSequence::new(len));
    let current = use_state_eq(|| 0usize);
    let step_refs = use_memo(len, |len| {
        (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>()
    });

    let on_step_input = {
        let machine = machine.clone();
        let current = current.clone();
        let step_refs = step_refs.clone();
        Callback::from(move |index: usize| {
            let Some(step) = step_refs.get(index) else { return };
            let values = match dom::control_values(step) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!("Skipping step {} input: {}", index, e);
                    return;
                }
            };
            if let Some(next) = machine.borrow_mut().on_step_input(index, values.as_slice()) {
                log::debug!("Revealing form step {}", next);
                current.set(next);
            }
        })
    };

    {
        let step_refs = step_refs.clone();
        use_effect_with(*current, move |current| {
            if *current > 0 {
                if let Some(element) = step_refs.get(*current).and_then(|r| r.cast::<web_sys::Element>()) {
                    dom::scroll_into_view(&element);
                }
            }
            || ()
        });
    }

    StepSequenceHandle {
        current: *current,
        step_refs: (*step_refs).clone(),
        on_step_input,
    }
}
