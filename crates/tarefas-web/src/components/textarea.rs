use leptos::prelude::*;

/// Multi-line text input used by the task and comment forms
#[component]
pub fn Textarea(name: &'static str, placeholder: &'static str) -> impl IntoView {
    view! { <textarea class="textarea" name=name placeholder=placeholder></textarea> }
}
