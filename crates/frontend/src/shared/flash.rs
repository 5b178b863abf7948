//! Transient screen notifications.
//!
//! Every screen shows its submit outcome as a message that clears itself
//! after a few seconds. A newer message restarts the clock; the pending
//! clear of an older one must not wipe it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISPLAY_MS: u32 = 4000;

#[derive(Clone, Copy)]
pub struct Flash {
    success: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
    success_stamp: StoredValue<u64>,
    error_stamp: StoredValue<u64>,
}

impl Flash {
    pub fn new() -> Self {
        Self {
            success: RwSignal::new(None),
            error: RwSignal::new(None),
            success_stamp: StoredValue::new(0),
            error_stamp: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        show(self.success, self.success_stamp, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        show(self.error, self.error_stamp, message.into());
    }

    /// Submit handlers clear the previous error before trying again.
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    pub fn success_message(&self) -> ReadSignal<Option<String>> {
        self.success.read_only()
    }

    pub fn error_message(&self) -> ReadSignal<Option<String>> {
        self.error.read_only()
    }
}

impl Default for Flash {
    fn default() -> Self {
        Self::new()
    }
}

fn show(slot: RwSignal<Option<String>>, stamp: StoredValue<u64>, message: String) {
    let this_stamp = stamp.get_value() + 1;
    stamp.set_value(this_stamp);
    slot.set(Some(message));

    spawn_local(async move {
        TimeoutFuture::new(DISPLAY_MS).await;
        // Only clear if no newer message took the slot meanwhile. The
        // screen may have been closed during the wait, hence the try_*.
        if stamp.try_get_value() == Some(this_stamp) {
            let _ = slot.try_set(None);
        }
    });
}

/// The alert pair every screen renders under its form.
#[component]
pub fn FlashView(flash: Flash) -> impl IntoView {
    let success = flash.success_message();
    let error = flash.error_message();

    view! {
        {move || success.get().map(|m| view! { <div class="alert alert--success">{m}</div> })}
        {move || error.get().map(|m| view! { <div class="alert alert--error">{m}</div> })}
    }
}
