use shared::checklist::{Checklist, ChecklistItem, DisplayState, Visibility};
use shared::config::ClassNames;
use shared::validation::PasswordStrength;
use yew::prelude::*;

use crate::styles;

pub const CHECKLIST_ELEMENT_ID: &str = "password-checklist";

#[derive(Properties, PartialEq)]
pub struct PasswordChecklistProps {
    pub checklist: Checklist,
    pub visibility: Visibility,
    pub classes: ClassNames,
    pub min_length: usize,
}

fn validation_icon(valid: bool) -> &'static str {
    if valid {
        "✓"
    } else {
        "•"
    }
}

#[function_component(PasswordChecklist)]
pub fn password_checklist(props: &PasswordChecklistProps) -> Html {
    let classes = &props.classes;
    let panel_class = props.visibility.class_name(classes).to_string();

    html! {
        <ul id={CHECKLIST_ELEMENT_ID} class={classes!(styles::VALIDATION_LIST, panel_class)}>
            { for ChecklistItem::ALL.iter().map(|item| {
                let state = props.checklist.state(*item);
                let state_class = state.class_name(classes).map(str::to_string);
                html! {
                    <li id={item.element_id()} class={classes!(styles::CHECKLIST_ITEM, state_class)}>
                        <span class="mr-2">{validation_icon(state == DisplayState::Valid)}</span>
                        {item.label(props.min_length)}
                    </li>
                }
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct StrengthMeterProps {
    pub strength: PasswordStrength,
}

#[function_component(StrengthMeter)]
pub fn strength_meter(props: &StrengthMeterProps) -> Html {
    let (width, color, text) = match props.strength {
        PasswordStrength::None => ("w-0", "bg-gray-200 dark:bg-gray-700", ""),
        PasswordStrength::Weak => ("w-1/3", "bg-red-500", "Weak"),
        PasswordStrength::Medium => ("w-2/3", "bg-yellow-500", "Medium"),
        PasswordStrength::Strong => ("w-full", "bg-green-500", "Strong"),
    };

    html! {
        <div class="mt-2 space-y-1">
            <div class="h-1 w-full bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                <div class={classes!("h-full", "transition-all", "duration-300", width, color)} />
            </div>
            <span class={styles::TEXT_SMALL}>{text}</span>
        </div>
    }
}
