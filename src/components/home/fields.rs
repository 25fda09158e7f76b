use leptos::*;

/// Inline error message under a form control
#[component]
pub fn FieldMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            error
                .get()
                .map(|message| view! { <span class="error-message">{message}</span> })
        }}
    }
}

/// Labelled text/number input with inline error
#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] step: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=name>{label}</label>
            <input
                type=input_type
                id=name
                name=name
                step=step
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
                class=move || if error.with(|e| e.is_some()) { "error" } else { "" }
            />
            <FieldMessage error=error />
        </div>
    }
}

/// Checkbox with trailing label
#[component]
pub fn CheckboxField(
    label: &'static str,
    name: &'static str,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group checkbox">
            <input
                type="checkbox"
                id=name
                name=name
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.call(event_target_checked(&ev))
            />
            <label for=name>{label}</label>
        </div>
    }
}
