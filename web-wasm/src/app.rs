//! Root application component and workflow wiring

use leptos::prelude::*;
use subconverter_common::{query, Level, Session};
use wasm_bindgen_futures::spawn_local;

use crate::actions;
use crate::api::backend;
use crate::components::{
    action_buttons::ActionButtons, feedback_panel::FeedbackPanel, header::Header,
    pair_editor::PairEditor, result_panel::ResultPanel, source_panel::SourcePanel,
};

/// Current wall-clock time as an `HH:MM:SS` display string
pub fn now_hms() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds()
    )
}

/// Service root derived from the page origin. Local and non-HTTP origins
/// fall back to the backend's default port.
fn detect_service_root() -> String {
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    match origin {
        Some(origin)
            if origin.starts_with("http")
                && !origin.contains("localhost")
                && !origin.contains("127.0.0.1") =>
        {
            origin
        }
        _ => query::DEFAULT_SERVICE_ROOT.to_string(),
    }
}

/// Reset the banner after `millis` if it still shows `message`
fn expire_notice(session: RwSignal<Session>, message: String, millis: u32) {
    gloo::timers::callback::Timeout::new(millis, move || {
        session.update(|s| s.clear_notice_if(&message));
    })
    .forget();
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let detected_root = detect_service_root();

    let session = RwSignal::new(Session::new());
    let (remote_url, set_remote_url) = signal(String::new());
    let (service_url, set_service_url) = signal(detected_root.clone());
    let (customize, set_customize) = signal(false);
    let (show_logs, set_show_logs) = signal(false);

    // Generate: validate locally, ask the backend, then assemble the URL
    let on_generate = move |_| {
        let begun = session.try_update(|s| {
            s.begin_generate(
                &service_url.get_untracked(),
                &remote_url.get_untracked(),
                &now_hms(),
            )
        });
        let Some(Ok(begun)) = begun else {
            return;
        };
        spawn_local(async move {
            let outcome =
                backend::validate_configuration(&begun.service_root, &begun.request).await;
            session.update(|s| s.finish_generate(outcome, &now_hms()));
        });
    };

    // Autodetect: the suggestions replace the pair list wholesale
    let on_autodetect = move |_| {
        let begun = session.try_update(|s| {
            s.begin_autodetect(
                &service_url.get_untracked(),
                &remote_url.get_untracked(),
                &now_hms(),
            )
        });
        let Some(Ok(begun)) = begun else {
            return;
        };
        spawn_local(async move {
            let outcome = backend::auto_detect_pairs(&begun.service_root, &begun.remote_url).await;
            session.update(|s| s.finish_autodetect(outcome, &now_hms()));
        });
    };

    let generated = move || session.with_untracked(|s| s.generated_url().map(str::to_string));

    let on_copy = move |_| {
        let Some(url) = generated() else {
            session.update(|s| s.notify(Level::Info, "There is no link to copy yet.", &now_hms()));
            return;
        };
        spawn_local(async move {
            match actions::copy_to_clipboard(&url).await {
                Ok(()) => {
                    let message = "Link copied to the clipboard.".to_string();
                    session.update(|s| s.notify(Level::Success, message.clone(), &now_hms()));
                    expire_notice(session, message, 3000);
                }
                Err(e) => {
                    session.update(|s| s.notify(Level::Error, format!("Copy failed: {e}"), &now_hms()));
                }
            }
        });
    };

    let on_open = move |_| {
        let Some(url) = generated() else {
            session.update(|s| s.notify(Level::Info, "There is no link to open yet.", &now_hms()));
            return;
        };
        match actions::open_in_new_tab(&url) {
            Ok(()) => {
                let message = "Opening the link in a new tab...".to_string();
                session.update(|s| s.notify(Level::Info, message.clone(), &now_hms()));
                expire_notice(session, message, 3000);
            }
            Err(e) => {
                session.update(|s| s.notify(Level::Error, format!("Open failed: {e}"), &now_hms()));
            }
        }
    };

    let on_download = move |_| {
        let Some(url) = generated() else {
            session.update(|s| s.notify(Level::Error, "There is no link to download yet.", &now_hms()));
            return;
        };
        session.update(|s| s.notify(Level::Info, "Preparing the configuration download...", &now_hms()));
        spawn_local(async move {
            match backend::fetch_config(&url).await {
                Ok(download) => {
                    let filename = query::config_filename(download.disposition.as_deref(), &url);
                    match actions::save_config_file(&download.bytes, &filename) {
                        Ok(()) => session.update(|s| {
                            s.notify(Level::Success, "Configuration file downloaded.", &now_hms())
                        }),
                        Err(e) => session.update(|s| {
                            s.notify(Level::Error, format!("Download failed: {e}"), &now_hms())
                        }),
                    }
                }
                Err(e) => {
                    session.update(|s| s.notify(Level::Error, e.to_string(), &now_hms()));
                }
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <SourcePanel
                remote_url=remote_url
                set_remote_url=set_remote_url
                service_url=service_url
                set_service_url=set_service_url
                customize=customize
                set_customize=set_customize
                detected_root=detected_root
            />

            <PairEditor session=session />

            <ActionButtons
                session=session
                on_generate=on_generate
                on_autodetect=on_autodetect
            />

            <ResultPanel
                session=session
                on_copy=on_copy
                on_open=on_open
                on_download=on_download
            />

            <FeedbackPanel
                session=session
                show_logs=show_logs
                set_show_logs=set_show_logs
            />
        </div>
    }
}
