use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the raw text of an input field and the callback that keeps it current.
#[derive(Clone, PartialEq)]
pub struct TextInput {
    /// The current text content of the input field.
    pub text: String,
    /// Callback for the input's `oninput` event.
    pub on_input: Callback<InputEvent>,
}

/// Custom hook to track a free-form text field.
///
/// Nothing is parsed here. Derived values are recomputed from `text` by the
/// caller, so partially typed input is never rejected.
#[hook]
pub fn use_text_input(initial: &str) -> TextInput {
    let initial = initial.to_string();
    let text_handle = use_state(move || initial);

    let on_input = {
        let text_setter = text_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    TextInput {
        text: (*text_handle).clone(),
        on_input,
    }
}
