//! Header badge showing browser connectivity.

#[cfg(test)]
#[path = "network_badge_test.rs"]
mod network_badge_test;

use leptos::prelude::*;

fn badge_label(online: bool) -> &'static str {
    if online { "Online" } else { "Offline" }
}

fn badge_class(online: bool) -> &'static str {
    if online { "network-badge network-badge--online" } else { "network-badge network-badge--offline" }
}

#[component]
pub fn NetworkBadge(online: Signal<bool>) -> impl IntoView {
    view! {
        <span class=move || badge_class(online.get())>
            <span class="network-badge__dot" class:network-badge__dot--pulse=move || online.get()></span>
            {move || badge_label(online.get())}
        </span>
    }
}
