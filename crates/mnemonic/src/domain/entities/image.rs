//! ImagePrompt / ImageResult - what the rewriter and generator produce

/// Image-generation prompt produced by the rewriter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePrompt(String);

impl ImagePrompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImagePrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Link to one generated image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    pub url: String,
}

impl ImageResult {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl std::fmt::Display for ImageResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}
