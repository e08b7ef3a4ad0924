//! Generated URL readout and post-success actions

use leptos::prelude::*;
use subconverter_common::Session;

#[component]
pub fn ResultPanel<FC, FO, FD>(
    session: RwSignal<Session>,
    on_copy: FC,
    on_open: FO,
    on_download: FD,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone,
    FO: Fn(()) + 'static + Clone,
    FD: Fn(()) + 'static + Clone,
{
    let url = move || {
        session.with(|s| s.generated_url().unwrap_or_default().to_string())
    };
    let unavailable = move || session.with(|s| s.generated_url().is_none() || s.is_busy());

    view! {
        <div class="result-panel">
            <div class="form-group">
                <label for="generated-url">"Generated configuration link"</label>
                <input
                    type="text"
                    id="generated-url"
                    readonly=true
                    placeholder="Generate a link first"
                    prop:value=url
                />
            </div>

            <div class="result-actions">
                <button
                    class="btn btn-secondary"
                    disabled=unavailable
                    on:click={
                        let on_copy = on_copy.clone();
                        move |_| on_copy(())
                    }
                >
                    "Copy"
                </button>

                <button
                    class="btn btn-secondary"
                    disabled=unavailable
                    on:click={
                        let on_open = on_open.clone();
                        move |_| on_open(())
                    }
                >
                    "Open"
                </button>

                <button
                    class="btn btn-secondary"
                    disabled=unavailable
                    on:click={
                        let on_download = on_download.clone();
                        move |_| on_download(())
                    }
                >
                    "Download"
                </button>
            </div>
        </div>
    }
}
