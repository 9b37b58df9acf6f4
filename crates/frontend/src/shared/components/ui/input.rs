use leptos::prelude::*;

/// Input component with label and server-side error message
#[component]
pub fn Input(
    /// Field name; also used as the element id
    #[prop(into)]
    name: String,
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Error message shown under the input
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let label_for = name.clone();
    let element_id = name.clone();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let has_error = move || error.get().is_some_and(|e| !e.is_empty());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <input
                id=element_id
                name=name
                class="form__input"
                class:form__input--invalid=has_error
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            <Show when=has_error>
                <p class="form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
