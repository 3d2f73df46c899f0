/// Outcome of classifying one transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// Not a comment line, or chat noise (bots, queue management).
    Dropped,
    /// A directive that only updated the meeting context.
    Recorded,
    Information(String),
    Topic { id: usize, text: String },
    Action { id: usize, text: String },
    Proposal(String),
    Resolution { id: usize, text: String },
    UseCase(String),
    Comment(Comment),
    /// Scribe text continuing the previous comment.
    Continuation(String),
    Error(String),
}

impl LineEvent {
    /// Whether the event renders to nothing.
    pub fn is_silent(&self) -> bool {
        matches!(self, LineEvent::Dropped | LineEvent::Recorded)
    }
}

/// A remark attributed to a participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Per-compile sequence number, used as the HTML anchor
    pub id: usize,
    pub speaker: String,
    pub text: String,
    /// Who typed the remark when it was captured for somebody else
    pub assist: Option<String>,
}

impl Comment {
    pub fn new(id: usize, speaker: impl Into<String>, text: &str) -> Self {
        Self {
            id,
            speaker: speaker.into(),
            text: capitalize_first_letter(text.trim()),
            assist: None,
        }
    }

    pub fn assisted_by(mut self, assist: impl Into<String>) -> Self {
        self.assist = Some(assist.into());
        self
    }
}

/// Upper-case the first ASCII letter unless the text opens with a link.
fn capitalize_first_letter(text: &str) -> String {
    let lower = text.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return text.to_string();
    }

    match text.find(|c: char| c.is_ascii_alphabetic()) {
        Some(idx) => {
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..idx]);
            out.push_str(&text[idx..=idx].to_ascii_uppercase());
            out.push_str(&text[idx + 1..]);
            out
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_capitalizes_first_letter() {
        let comment = Comment::new(1, "Manu Sporny", " sounds good");
        assert_eq!(comment.text, "Sounds good");
    }

    #[test]
    fn test_capitalizes_letter_after_vote() {
        assert_eq!(capitalize_first_letter("+1 to that"), "+1 To that");
    }

    #[test]
    fn test_links_are_not_capitalized() {
        assert_eq!(
            capitalize_first_letter("https://example.org/spec"),
            "https://example.org/spec"
        );
    }

    #[test]
    fn test_silent_events() {
        assert!(LineEvent::Dropped.is_silent());
        assert!(LineEvent::Recorded.is_silent());
        assert!(!LineEvent::Proposal("x".to_string()).is_silent());
    }
}
