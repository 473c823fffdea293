//! Operator-facing text

use crate::domain::{ImagePrompt, ImageResult, VerseReference, VerseText};

pub const BOOK_PROMPT: &str = "Enter the name of a book from the Bible (example: Matthew, Mark, Luke, etc.)";
pub const CHAPTER_PROMPT: &str = "Enter the chapter number (make sure it's a valid chapter)";
pub const VERSE_PROMPT: &str = "Enter the verse number (make sure it's a valid verse)";

pub const REWRITE_QUESTION: &str = "Is that a good summarization? (yes/no)";
pub const IMAGE_QUESTION: &str = "Do you like the image? (yes/no)";

pub const INVALID_INPUT: &str = "Invalid input, please enter 'yes' or 'no'";
pub const IMAGE_FAILED: &str = "Error: API request failed";

pub const CLOSING: &str = "Thank You for using Mnemonic Verses!";

pub fn candidate(prompt: &ImagePrompt) -> String {
    format!("Here is the summarized text\n{}\n", prompt)
}

pub fn image_link(image: &ImageResult) -> String {
    format!(
        "Here is the link to the image, click the link to view it. {}",
        image
    )
}

pub fn sentinel_fallback(reference: &VerseReference) -> String {
    format!(
        "Could not look up {}; continuing with the placeholder text",
        reference
    )
}

pub fn reference_summary(reference: &VerseReference, verse: &VerseText) -> String {
    format!(
        "this was your verse for reference\n{} '{}'",
        reference, verse
    )
}
