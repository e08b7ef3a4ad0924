//! Editable landing/front pair rows
//!
//! The session's pair list is the single authority. Keystrokes write into
//! the model untracked (the DOM already shows the typed value), while
//! structural changes go through tracked updates and re-render the rows
//! with fresh numbering.

use leptos::prelude::*;
use subconverter_common::Session;

use crate::app::now_hms;

#[component]
pub fn PairEditor(session: RwSignal<Session>) -> impl IntoView {
    let rows = move || {
        session.with(|s| {
            s.pairs()
                .rows()
                .iter()
                .map(|row| (row.landing.clone(), row.front.clone()))
                .collect::<Vec<_>>()
        })
    };
    let row_count = move || session.with(|s| s.pairs().len());
    let at_capacity = move || session.with(|s| s.pairs().is_at_capacity());

    view! {
        <div class="pair-editor">
            <h2>"Landing / front node pairs"</h2>
            {move || {
                rows()
                    .into_iter()
                    .enumerate()
                    .map(|(index, (landing, front))| {
                        view! {
                            <div class="pair-row">
                                <span class="row-number">{format!("{}.", index + 1)}</span>
                                <input
                                    type="text"
                                    class="landing-input"
                                    placeholder="Landing node name (required)"
                                    prop:value=landing
                                    on:input=move |ev| {
                                        session.update_untracked(|s| {
                                            s.set_landing(index, event_target_value(&ev));
                                        });
                                    }
                                />
                                <span class="dialer-label">"dialer-proxy:"</span>
                                <input
                                    type="text"
                                    class="front-input"
                                    placeholder="Front node/group name (required)"
                                    prop:value=front
                                    on:input=move |ev| {
                                        session.update_untracked(|s| {
                                            s.set_front(index, event_target_value(&ev));
                                        });
                                    }
                                />
                                <button
                                    type="button"
                                    class="row-action add"
                                    title="Add a row below this one"
                                    disabled=at_capacity
                                    on:click=move |_| {
                                        session.update(|s| s.insert_pair_after(Some(index), &now_hms()));
                                    }
                                >
                                    "+"
                                </button>
                                <button
                                    type="button"
                                    class="row-action remove"
                                    title="Remove this row"
                                    disabled=move || row_count() == 1
                                    on:click=move |_| {
                                        session.update(|s| s.remove_pair(index, &now_hms()));
                                    }
                                >
                                    "−"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
