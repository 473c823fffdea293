//! Verse - the scripture passage a session starts from

use serde::Deserialize;

/// A (book, chapter, verse) triple identifying one passage.
///
/// Chapter and verse are kept as the operator typed them; the lookup
/// service is the one that rejects nonsense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseReference {
    pub book: String,
    pub chapter: String,
    pub verse: String,
}

impl VerseReference {
    pub fn new(
        book: impl Into<String>,
        chapter: impl Into<String>,
        verse: impl Into<String>,
    ) -> Self {
        Self {
            book: book.into(),
            chapter: chapter.into(),
            verse: verse.into(),
        }
    }

    /// Path segment understood by bible-api.com, e.g. `1%20John+4:8`
    pub fn to_path(&self) -> String {
        format!(
            "{}+{}:{}",
            urlencoding::encode(&self.book),
            self.chapter,
            self.verse
        )
    }
}

impl std::fmt::Display for VerseReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// Scripture text returned by the lookup service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerseText {
    /// The passage, exactly as the service returned it
    pub text: String,
    /// Canonical reference echoed by the service (e.g. "Matthew 5:9")
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub translation_name: Option<String>,
}

impl VerseText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reference: None,
            translation_name: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for VerseText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
