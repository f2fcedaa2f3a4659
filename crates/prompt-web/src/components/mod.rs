mod cards;
mod copy_button;

pub use cards::HighlightCards;
pub use copy_button::CopyButton;
