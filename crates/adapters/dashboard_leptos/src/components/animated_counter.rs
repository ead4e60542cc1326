//! Statistics counter that counts up to its target.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rescuehub_domain::counter::{self, DURATION_MS, FRAME_MS};

/// A labelled number animating from zero to `target` with an ease-out curve.
#[component]
pub fn AnimatedCounter(
    /// Caption under the number.
    label: &'static str,
    /// Final value; always the last value shown.
    target: u64,
) -> impl IntoView {
    let value = RwSignal::new(0_u64);

    spawn_local(async move {
        for (index, frame) in counter::frames(target, DURATION_MS, FRAME_MS)
            .into_iter()
            .enumerate()
        {
            if index > 0 {
                TimeoutFuture::new(FRAME_MS).await;
            }
            // Disposed once the counter leaves the page.
            if value.try_set(frame).is_some() {
                return;
            }
        }
    });

    view! {
        <div class="stat-card" data-counter=label>
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
