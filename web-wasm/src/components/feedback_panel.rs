//! Current notice banner and the collapsible log history

use leptos::prelude::*;
use subconverter_common::{FeedbackEntry, Session};

#[component]
pub fn FeedbackPanel(
    session: RwSignal<Session>,
    show_logs: ReadSignal<bool>,
    set_show_logs: WriteSignal<bool>,
) -> impl IntoView {
    let current = move || session.with(|s| s.feedback().current().cloned());
    let banner_class = move || {
        let level = current().map(|entry| entry.level.as_str()).unwrap_or("info");
        format!("feedback-message feedback-{level}")
    };
    let banner_text = move || {
        current()
            .map(|entry| entry.message)
            .unwrap_or_else(|| "Waiting for input...".to_string())
    };
    let entries = move || {
        session.with(|s| {
            s.feedback()
                .entries()
                .iter()
                .cloned()
                .collect::<Vec<FeedbackEntry>>()
        })
    };

    view! {
        <div class="feedback-panel">
            <div class=banner_class>{banner_text}</div>

            <button
                type="button"
                class="toggle-log"
                title=move || if show_logs.get() { "Hide the detailed log" } else { "Show the detailed log" }
                on:click=move |_| set_show_logs.set(!show_logs.get())
            >
                {move || if show_logs.get() { "▼" } else { "▶" }}
            </button>

            <Show when=move || show_logs.get()>
                <div class="log-container">
                    <Show
                        when=move || !entries().is_empty()
                        fallback=|| view! { <p class="text-muted">"No detailed log entries yet."</p> }
                    >
                        {move || {
                            entries()
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <div class="log-entry">
                                            <span class=format!("log-timestamp log-{}", entry.level.as_str())>
                                                {format!("[{}] ", entry.timestamp)}
                                            </span>
                                            <span class="log-message">{entry.message}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </Show>
                </div>
            </Show>
        </div>
    }
}
