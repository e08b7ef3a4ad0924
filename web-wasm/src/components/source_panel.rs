//! Source inputs: the original subscription link and the service root

use leptos::prelude::*;

#[component]
pub fn SourcePanel(
    remote_url: ReadSignal<String>,
    set_remote_url: WriteSignal<String>,
    service_url: ReadSignal<String>,
    set_service_url: WriteSignal<String>,
    customize: ReadSignal<bool>,
    set_customize: WriteSignal<bool>,
    /// Origin-derived root restored when the customize switch is turned off
    detected_root: String,
) -> impl IntoView {
    let on_toggle = move |ev| {
        let checked = event_target_checked(&ev);
        set_customize.set(checked);
        if !checked {
            set_service_url.set(detected_root.clone());
        }
    };

    view! {
        <div class="source-panel">
            <div class="form-group">
                <label for="remote-url">"Original subscription link"</label>
                <input
                    type="text"
                    id="remote-url"
                    placeholder="https://example.com/subscription"
                    prop:value=move || remote_url.get()
                    on:input=move |ev| {
                        set_remote_url.set(event_target_value(&ev));
                    }
                />
            </div>

            <div class="form-group">
                <label for="service-url">"Service root"</label>
                <input
                    type="text"
                    id="service-url"
                    disabled=move || !customize.get()
                    prop:value=move || service_url.get()
                    on:input=move |ev| {
                        set_service_url.set(event_target_value(&ev));
                    }
                />
                <label class="switch-label">
                    <input
                        type="checkbox"
                        prop:checked=move || customize.get()
                        on:change=on_toggle
                    />
                    "Customize the service root"
                </label>
            </div>
        </div>
    }
}
