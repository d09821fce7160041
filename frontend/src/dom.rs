use shared::theme::Theme;
use wasm_bindgen::JsCast;
use web_sys::{
    window, Element, HtmlInputElement, HtmlSelectElement, Node, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::NodeRef;

use crate::error::BindError;

const STEP_CONTROLS: &str = "input, select";

pub fn input_value(node: &NodeRef, name: &'static str) -> Result<String, BindError> {
    if node.get().is_none() {
        return Err(BindError::MissingElement(name));
    }
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .ok_or(BindError::WrongElementType(name))
}

/// Current value of every input and select inside a step section.
pub fn control_values(step: &NodeRef) -> Result<Vec<String>, BindError> {
    let element = step
        .cast::<Element>()
        .ok_or(BindError::MissingElement("form step"))?;
    let controls = element
        .query_selector_all(STEP_CONTROLS)
        .map_err(|_| BindError::Query(STEP_CONTROLS))?;

    let mut values = Vec::with_capacity(controls.length() as usize);
    for i in 0..controls.length() {
        let Some(node) = controls.item(i) else { continue };
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            values.push(input.value());
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            values.push(select.value());
        } else {
            return Err(BindError::WrongElementType("step control"));
        }
    }
    Ok(values)
}

/// Whether the element focused right now is one of `fields`.
pub fn focus_within(fields: &[NodeRef]) -> bool {
    let Some(active) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
    else {
        return false;
    };
    let active: &Node = &active;

    fields
        .iter()
        .filter_map(NodeRef::get)
        .any(|node| node.is_same_node(Some(active)))
}

pub fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn apply_theme(theme: Theme) -> Result<(), BindError> {
    let body = window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .ok_or(BindError::MissingElement("body"))?;

    body.class_list()
        .toggle_with_force(shared::constants::DARK_MODE_CLASS, theme.is_dark())
        .map_err(|_| BindError::WrongElementType("body"))?;
    Ok(())
}
