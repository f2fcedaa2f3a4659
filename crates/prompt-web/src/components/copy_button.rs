use leptos::prelude::*;

use crate::copy::CopyState;

/// A button that copies text to clipboard with visual feedback.
/// The acknowledgment reverts on its own after [`crate::copy::COPY_FEEDBACK_MS`].
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    text: &'static str,
) -> impl IntoView {
    let state = RwSignal::new(CopyState::new());

    // At most one revert timer outstanding; replacing the handle cancels
    // the superseded one.
    #[cfg(feature = "hydrate")]
    let pending_reset = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::copy::{COPY_FEEDBACK_MS, NavigatorClipboard, copy_text, now_ms};
            use gloo_timers::callback::Timeout;

            leptos::task::spawn_local(async move {
                let mut current = state.get_untracked();
                let copied = copy_text(&NavigatorClipboard, text, &mut current, now_ms()).await;
                state.set(current);

                if copied {
                    // advance() re-checks the deadline, so a stale fire
                    // cannot revert a re-armed acknowledgment
                    let timer = Timeout::new(COPY_FEEDBACK_MS, move || {
                        state.update(|s| s.advance(now_ms()));
                    });
                    pending_reset.set_value(Some(timer));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    view! {
        <button
            type="button"
            on:click=on_copy
            class="px-3 py-1 border border-dashed border-[var(--rule)] hover:bg-[var(--rule)] transition-colors cursor-pointer"
        >
            <span class="mr-1">
                {move || if state.with(|s| s.is_copied()) { "\u{2713}" } else { "\u{1F4CB}" }}
            </span>
            {move || state.with(|s| s.label())}
        </button>
    }
}
