use leptos::prelude::*;

/// Shared button styling; callers only add color classes.
#[component]
pub fn Button(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] on_click: Option<Callback<()>>,
    #[prop(optional)] submit: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=format!("px-4 py-2 rounded font-bold text-white transition duration-300 {class}")
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Labeled controlled input: the displayed value is driven entirely by the
/// parent-owned signal, written back on every keystroke.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into, default = String::from("text"))] input_type: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <label class="block text-gray-700 dark:text-gray-300 mb-2">{label}</label>
            <input
                type=input_type
                prop:value=value
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full p-2 border border-gray-300 rounded bg-white dark:bg-gray-700 text-gray-900 dark:text-gray-100"
            />
        </div>
    }
}
