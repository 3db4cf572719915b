use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DEBOUNCE_MS: u32 = 300;

/// Search box with debounce and a clear button. `on_change` fires once the
/// user stops typing for [`DEBOUNCE_MS`].
#[component]
pub fn SearchInput(
    /// Initial filter value
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked with the debounced filter text
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Each keystroke bumps the generation; only the latest one commits.
    let generation = StoredValue::new(0u64);

    let handle_input = move |text: String| {
        set_input_value.set(text.clone());
        let current = generation.get_value() + 1;
        generation.set_value(current);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_value() == current {
                on_change.run(text);
            }
        });
    };

    let clear = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-clear" title="Clear" on:click=clear>
                    "×"
                </button>
            </Show>
        </div>
    }
}
