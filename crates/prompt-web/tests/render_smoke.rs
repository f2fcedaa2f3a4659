//! Smoke test: server-render the page and check the static content landed.
//!
//! Run with: cargo test -p prompt-web --features ssr

#[cfg(feature = "ssr")]
#[test]
fn home_page_renders_prompt_and_cards() {
    use leptos::prelude::*;
    use prompt_web::content;

    // The reactive runtime needs an active Owner before any view is built.
    let owner = Owner::new();
    owner.set();

    let html = view! { <prompt_web::pages::HomePage /> }.to_html();

    assert!(html.contains(content::PAGE_TITLE), "missing page title");
    for card in content::HIGHLIGHT_CARDS {
        assert!(html.contains(card.title), "missing card: {}", card.title);
    }

    // Button starts in the idle state
    assert!(html.contains("Copy prompt"));
    assert!(!html.contains("Prompt copied!"));

    // The textarea carries the full prompt
    assert!(html.contains("n8n solutions architect"), "prompt body missing");
    assert!(
        html.len() > 9_000,
        "page should carry the full prompt, got {} bytes",
        html.len()
    );
}
