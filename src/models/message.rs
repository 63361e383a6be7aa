use super::commit::CommitError;
use std::fmt;

/// Lines starting with this marker are editor guidance, never message text
pub const COMMENT_MARKER: char = '#';

/// A planned commit message: one headline plus free-form body
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitMessage {
    pub headline: String,
    pub body: String,
}

impl CommitMessage {
    pub fn new(headline: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            body: body.into(),
        }
    }

    /// Parse raw editor output into a message
    ///
    /// Comment lines are dropped and every surviving line is trimmed. The first
    /// surviving line becomes the headline, even when blank; everything after
    /// it, joined and trimmed as a block, becomes the body.
    pub fn parse(raw: &str) -> Result<Self, CommitError> {
        let mut lines = raw
            .lines()
            .filter(|line| !line.starts_with(COMMENT_MARKER))
            .map(str::trim);

        let headline = lines.next().ok_or(CommitError::EmptyMessage)?;
        let body = lines.collect::<Vec<_>>().join("\n");

        Ok(Self::new(headline, body.trim()))
    }

    /// True when neither headline nor body carries any text
    pub fn is_empty(&self) -> bool {
        self.headline.is_empty() && self.body.is_empty()
    }

    /// Serialize to the stored `headline\n\nbody` shape
    pub fn to_canonical(&self) -> String {
        format!("{}\n\n{}", self.headline, self.body)
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}", self.headline, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_comments() {
        let raw = ["Fix bug", "# comment", "", "Body text", "# another"].join("\n");
        let message = CommitMessage::parse(&raw).unwrap();

        assert_eq!(message.headline, "Fix bug");
        assert_eq!(message.body, "Body text");
    }

    #[test]
    fn test_parse_trims_ragged_input() {
        let raw = "   Add parser  \n\n\n\n   first line\n  second line   \n\n\n";
        let message = CommitMessage::parse(raw).unwrap();

        assert_eq!(message.headline, "Add parser");
        assert_eq!(message.body, "first line\nsecond line");
        assert_eq!(
            message.to_canonical(),
            "Add parser\n\nfirst line\nsecond line"
        );
    }

    #[test]
    fn test_parse_keeps_inner_blank_lines() {
        let raw = "Headline\n\nParagraph one\n\nParagraph two\n";
        let message = CommitMessage::parse(raw).unwrap();

        assert_eq!(message.body, "Paragraph one\n\nParagraph two");
    }

    #[test]
    fn test_parse_indented_hash_is_not_a_comment() {
        let raw = "Headline\n\n  #42 is fixed by this";
        let message = CommitMessage::parse(raw).unwrap();

        assert_eq!(message.body, "#42 is fixed by this");
    }

    #[test]
    fn test_parse_headline_only() {
        let message = CommitMessage::parse("Just a headline\n").unwrap();

        assert_eq!(message.headline, "Just a headline");
        assert_eq!(message.body, "");
        assert_eq!(message.to_canonical(), "Just a headline\n\n");
    }

    #[test]
    fn test_parse_leading_blank_line_is_the_headline() {
        let message = CommitMessage::parse("\nHeadline\nBody").unwrap();

        assert_eq!(message.headline, "");
        assert_eq!(message.body, "Headline\nBody");
    }

    #[test]
    fn test_parse_no_lines_is_rejected() {
        assert!(matches!(
            CommitMessage::parse(""),
            Err(CommitError::EmptyMessage)
        ));
        assert!(matches!(
            CommitMessage::parse("# only\n# comments\n"),
            Err(CommitError::EmptyMessage)
        ));
    }

    #[test]
    fn test_parse_blank_lines_only_is_empty() {
        let message = CommitMessage::parse("# only\n# comments\n\n   \n").unwrap();
        assert!(message.is_empty());
        assert!(!CommitMessage::new("", "B").is_empty());
    }

    #[test]
    fn test_canonical_round_trip_is_stable() {
        let samples = [
            CommitMessage::new("A", "B"),
            CommitMessage::new("Headline", ""),
            CommitMessage::new("", "B"),
            CommitMessage::new("", ""),
            CommitMessage::new("Refactor store", "Line one\n\nLine three"),
        ];

        for message in samples {
            let canonical = message.to_canonical();
            let reparsed = CommitMessage::parse(&canonical).unwrap();
            assert_eq!(reparsed.to_canonical(), canonical);
            assert_eq!(reparsed, message);
        }
    }

    #[test]
    fn test_display_matches_canonical() {
        let message = CommitMessage::new("X", "Y");
        assert_eq!(message.to_string(), message.to_canonical());
    }
}
