//! Workflow trigger buttons

use leptos::prelude::*;
use subconverter_common::Session;

#[component]
pub fn ActionButtons<FG, FA>(
    session: RwSignal<Session>,
    on_generate: FG,
    on_autodetect: FA,
) -> impl IntoView
where
    FG: Fn(()) + 'static + Clone,
    FA: Fn(()) + 'static + Clone,
{
    let busy = move || session.with(|s| s.is_busy());

    view! {
        <div class="action-buttons">
            <button
                class="btn btn-secondary"
                disabled=busy
                on:click={
                    let on_autodetect = on_autodetect.clone();
                    move |_| on_autodetect(())
                }
            >
                {move || if busy() { "Working..." } else { "Auto-detect pairs" }}
            </button>

            <button
                class="btn btn-primary"
                disabled=busy
                on:click={
                    let on_generate = on_generate.clone();
                    move |_| on_generate(())
                }
            >
                {move || if busy() { "Working..." } else { "Validate and generate link" }}
            </button>
        </div>
    }
}
