use leptos::prelude::*;

/// Input component with label support
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    /// Shown through `prop:value`, so recalculated values replace what is typed
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" (default), "number", "date", "password"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] readonly: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <input
                id=input_id
                class=move || format!("form__input {}", additional_class())
                class:form__input--readonly=readonly
                type=input_t
                step=move || (input_t() == "number").then_some("any")
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get()
                readonly=readonly
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
