use leptos::prelude::*;

/// Select component with label and server-side error message
#[component]
pub fn Select(
    /// Field name; also used as the element id
    #[prop(into)]
    name: String,
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Error message shown under the select
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let label_for = name.clone();
    let element_id = name.clone();
    let has_error = move || error.get().is_some_and(|e| !e.is_empty());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <select
                id=element_id
                name=name
                class="form__select"
                class:form__select--invalid=has_error
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            <Show when=has_error>
                <p class="form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
