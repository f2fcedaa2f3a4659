use leptos::prelude::*;

use crate::components::{CopyButton, HighlightCards};
use crate::content;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            // Header
            <header class="mb-8 text-center">
                <h1 class="text-xl font-bold mb-2">{content::PAGE_TITLE}</h1>
                <p class="text-[var(--ink-light)]">{content::PAGE_SUBTITLE}</p>
            </header>

            // Highlight cards
            <div class="mb-8">
                <HighlightCards />
            </div>

            // Prompt box
            <section class="border border-dashed border-[var(--rule)] p-4">
                <textarea
                    class="prompt-area w-full h-96 font-mono text-sm bg-[var(--paper)] resize-y"
                    spellcheck="false"
                    readonly=true
                >
                    {content::PROMPT}
                </textarea>
                <div class="mt-3 flex justify-end">
                    <CopyButton text=content::PROMPT />
                </div>
            </section>

            // Footnote
            <p class="mt-6 text-center text-[var(--ink-light)] text-sm">{content::FOOTNOTE}</p>
        </main>
    }
}
