use chrono::{DateTime, Utc};

const DEFAULT_FILE_NAME: &str = "introduction.txt";

/// A generated self-introduction.
#[derive(Debug, Clone, PartialEq)]
pub struct Introduction {
    /// Introduction text as returned by the model.
    pub text: String,
    /// Model identifier that produced the text.
    pub model: String,
    /// Prompt the text was generated from.
    pub prompt: String,
    pub generated_at: DateTime<Utc>,
}

impl Introduction {
    pub fn new(text: impl Into<String>, model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
            prompt: prompt.into(),
            generated_at: Utc::now(),
        }
    }

    /// Content written when the introduction is saved.
    pub fn file_contents(&self) -> String {
        format!("{}\n", self.text.trim_end())
    }
}

/// Default download file name derived from the nickname.
pub fn default_file_name(nickname: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;

    for ch in nickname.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() { DEFAULT_FILE_NAME.to_string() } else { format!("introduction-{}.txt", slug) }
}
