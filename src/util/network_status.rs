//! Browser connectivity tracking for the status badge.
//!
//! Reads `navigator.onLine` once, then follows the window's `online` and
//! `offline` events until the owning component is cleaned up. Requires a
//! browser environment; SSR and native builds report online.

#[cfg(test)]
#[path = "network_status_test.rs"]
mod network_status_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectivityEvent {
    Online,
    Offline,
}

/// Connectivity flag plus listener attachment state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectivityProbe {
    online: bool,
    attached: bool,
}

impl ConnectivityProbe {
    /// Start attached, seeded from `navigator.onLine` when the browser reports it.
    pub fn new(initial: Option<bool>) -> Self {
        Self { online: initial.unwrap_or(true), attached: true }
    }

    pub fn is_online(self) -> bool {
        self.online
    }

    /// Apply one connectivity event. Returns whether the flag changed.
    /// Events arriving after [`ConnectivityProbe::detach`] are ignored.
    pub fn apply(&mut self, event: ConnectivityEvent) -> bool {
        if !self.attached {
            return false;
        }
        let next = matches!(event, ConnectivityEvent::Online);
        let changed = next != self.online;
        self.online = next;
        changed
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }
}

/// Current `navigator.onLine`, if the browser exposes it.
pub fn read_navigator_online() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().map(|w| w.navigator().on_line())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Reactive online flag that follows window connectivity events.
///
/// Listeners are removed when the calling component's owner is cleaned up.
pub fn use_network_status() -> Signal<bool> {
    let probe = RwSignal::new(ConnectivityProbe::new(read_navigator_online()));

    #[cfg(feature = "hydrate")]
    {
        let on_online = window_event_listener(leptos::ev::online, move |_| {
            probe.update(|p| {
                p.apply(ConnectivityEvent::Online);
            });
        });
        let on_offline = window_event_listener(leptos::ev::offline, move |_| {
            probe.update(|p| {
                p.apply(ConnectivityEvent::Offline);
            });
        });
        on_cleanup(move || {
            on_online.remove();
            on_offline.remove();
            let _ = probe.try_update(ConnectivityProbe::detach);
        });
    }

    Signal::derive(move || probe.get().is_online())
}
