//! Page header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>"Chain Subscription Configurator"</h1>
            <p class="text-muted">
                "Turn a remote subscription into a chained dialer-proxy configuration link"
            </p>
        </header>
    }
}
