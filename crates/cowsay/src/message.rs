//! The user message: line wrapping and bubble construction.
use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

use crate::bubble::{Bubble, BubbleKind};

/// Wrap column used when none is configured.
pub const DEFAULT_WRAP: usize = 40;

#[derive(Clone, Debug)]
pub struct Message {
    text: String,
    kind: BubbleKind,
    wrap: usize,
}

impl Message {
    pub fn new(text: impl Into<String>, kind: BubbleKind) -> Self {
        Self {
            text: text.into(),
            kind,
            wrap: DEFAULT_WRAP,
        }
    }

    pub fn speech(text: impl Into<String>) -> Self {
        Self::new(text, BubbleKind::Speech)
    }

    pub fn thought(text: impl Into<String>) -> Self {
        Self::new(text, BubbleKind::Thought)
    }

    /// Sets the wrap column, 0 disables wrapping.
    pub fn with_wrap(mut self, wrap: usize) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> BubbleKind {
        self.kind
    }

    pub fn wrap_width(&self) -> usize {
        self.wrap
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        wrap(&self.text, self.wrap)
    }

    pub fn bubble(&self) -> Bubble {
        let lines = self.lines();
        Bubble::new(self.kind, &lines, longest_line(&lines))
    }
}

/// Wraps `text` to `width` characters.
///
/// Explicit line breaks are kept and each line is wrapped on its own, breaking
/// at spaces only. A word longer than `width` stays whole on its own line.
/// A width of 0 only splits on the explicit line breaks.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.lines().map(str::to_string).collect();
    }
    let options = Options::new(width)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit);
    text.lines()
        .flat_map(|line| textwrap::wrap(line, &options))
        .map(|line| line.into_owned())
        .collect()
}

/// Character count of the longest line, 0 for no lines.
pub fn longest_line<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|l| l.as_ref().chars().count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_spaces() {
        assert_eq!(
            wrap("This is a long label", 10),
            vec!["This is a", "long label"]
        );
    }

    #[test]
    fn long_word_is_kept_whole() {
        // Historical cowsay cuts mid-word at the column; words are kept intact here.
        assert_eq!(
            wrap("a supercalifragilistic word", 8),
            vec!["a", "supercalifragilistic", "word"]
        );
        assert_eq!(wrap("Hello", 2), vec!["Hello"]);
    }

    #[test]
    fn hyphens_are_not_break_points() {
        assert_eq!(wrap("well-known fact", 6), vec!["well-known", "fact"]);
    }

    #[test]
    fn explicit_breaks_wrap_independently() {
        assert_eq!(
            wrap("one two three\nfour five", 8),
            vec!["one two", "three", "four", "five"]
        );
    }

    #[test]
    fn zero_width_keeps_lines() {
        let long = "Moo moo moo moo moo moo moo moo moo moo moo moo moo moo moo";
        let text = format!("{long}\nshort");
        assert_eq!(wrap(&text, 0), vec![long, "short"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap("", 40).is_empty());
        assert!(wrap("", 0).is_empty());
        assert!(Message::speech("").bubble().is_empty());
    }

    #[test]
    fn lines_never_exceed_width_or_longest_word() {
        let text = "the quick brown fox jumps over the lazy dog antidisestablishmentarianism";
        let longest_word = text.split(' ').map(str::len).max().unwrap();
        for width in 1..30 {
            for line in wrap(text, width) {
                assert!(line.len() <= width.max(longest_word), "{width}: {line:?}");
            }
        }
    }

    #[test]
    fn longest_line_is_max_width() {
        assert_eq!(longest_line(&["ab", "abcd", "abc"]), 4);
        assert_eq!(longest_line::<&str>(&[]), 0);
        assert_eq!(longest_line(&wrap("日本語 abc", 0)), 7);
    }

    #[test]
    fn wraps_non_ascii_by_characters() {
        assert_eq!(wrap("日本語 日本語 abc", 7), vec!["日本語 日本語", "abc"]);
    }

    #[test]
    fn non_ascii_bubble_stays_rectangular() {
        let bubble = Message::speech("こんにちは 世界\nhello wörld, ça va?").with_wrap(10).bubble();
        let widths = crate::test_support::interior_widths(bubble.text());
        assert_eq!(widths.len(), 4);
        assert!(widths.iter().all(|w| *w == widths[0]), "{widths:?}");
    }

    #[test]
    fn message_bubble_uses_longest_line() {
        let bubble = Message::speech("Moo moo moo moo").with_wrap(8).bubble();
        assert_eq!(
            bubble.text(),
            " _________ \n/ Moo moo \\\n\\ moo moo /\n --------- "
        );
        assert_eq!(bubble.connector(), "\\");
    }
}
