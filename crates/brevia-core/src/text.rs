/// Counts displayed under the summary pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub sentences: usize,
    pub words: usize,
    pub characters: usize,
}

impl TextStats {
    /// A sentence is a non-blank `.`-separated segment; a word is a
    /// whitespace-separated token.
    pub fn of(text: &str) -> Self {
        if text.is_empty() {
            return Self {
                sentences: 0,
                words: 0,
                characters: 0,
            };
        }

        let sentences = text.split('.').filter(|s| !s.trim().is_empty()).count();
        let words = text.split_whitespace().count();
        let characters = text.chars().count();

        Self {
            sentences,
            words,
            characters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sentences_two_words() {
        let stats = TextStats::of("Hello. World.");
        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn test_empty_text() {
        let stats = TextStats::of("");
        assert_eq!(
            stats,
            TextStats {
                sentences: 0,
                words: 0,
                characters: 0
            }
        );
    }

    #[test]
    fn test_whitespace_only() {
        let stats = TextStats::of("   \n\t ");
        assert_eq!(stats.sentences, 0);
        assert_eq!(stats.words, 0);
    }

    #[test]
    fn test_trailing_dots_do_not_add_sentences() {
        let stats = TextStats::of("One sentence...");
        assert_eq!(stats.sentences, 1);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn test_multiline_counts() {
        let stats = TextStats::of("First line here.\nSecond line.");
        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.words, 5);
    }

    #[test]
    fn test_characters_are_chars_not_bytes() {
        let stats = TextStats::of("héllo");
        assert_eq!(stats.characters, 5);
    }
}
