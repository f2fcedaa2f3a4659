use leptos::prelude::*;

use crate::content::HIGHLIGHT_CARDS;

/// The three fixed description cards shown above the prompt box
#[component]
pub fn HighlightCards() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-3">
            {HIGHLIGHT_CARDS
                .iter()
                .map(|card| view! {
                    <article class="border border-dashed border-[var(--rule)] p-4">
                        <h2 class="font-bold uppercase mb-2">{card.title}</h2>
                        <p class="text-sm">{card.body}</p>
                    </article>
                })
                .collect_view()}
        </div>
    }
}
