//! Case rendering.
//!
//! A [`StyleDescriptor`] says how a segmented string is written back out: the text placed
//! between words, the casing applied to each word, an optional override for the first word, an
//! optional case applied to the rendered words as a whole, and what happens to the separator
//! runs at the edges of the input.

use crate::segment::{Segments, segment};

/// Casing applied to a single word. Only ASCII letters are affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCase {
    /// Leave the word as it is.
    Unchanged,
    /// `word`
    Lower,
    /// `WORD`
    Upper,
    /// Uppercase the first character, leave the rest (`wORD` -> `WORD`, `word` -> `Word`).
    CapitalizeFirstLetter,
    /// Lowercase the first character, leave the rest (`Word` -> `word`, `WORD` -> `wORD`).
    LowerFirstLetter,
    /// Uppercase the first character, lowercase the rest (`wORD` -> `Word`).
    Capitalize,
}

impl WordCase {
    fn apply(self, first: bool, c: char) -> char {
        match (self, first) {
            (Self::Unchanged, _)
            | (Self::CapitalizeFirstLetter | Self::LowerFirstLetter, false) => c,
            (Self::Lower, _) | (Self::LowerFirstLetter, true) | (Self::Capitalize, false) => {
                c.to_ascii_lowercase()
            }
            (Self::Upper, _) | (Self::CapitalizeFirstLetter | Self::Capitalize, true) => {
                c.to_ascii_uppercase()
            }
        }
    }
}

/// Casing applied to all rendered words after [`WordCase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WholeCase {
    Lower,
    Upper,
}

impl WholeCase {
    fn apply(self, c: char) -> char {
        match self {
            Self::Lower => c.to_ascii_lowercase(),
            Self::Upper => c.to_ascii_uppercase(),
        }
    }
}

/// What to do with the separator runs before the first and after the last word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeRuns {
    /// Emit the original separator characters unchanged.
    Verbatim,
    /// Emit the style delimiter once per original separator character.
    Repeat,
    /// Drop them.
    Strip,
}

/// A rendering style.
///
/// Descriptors are plain values built with `const fn` setters, so a style can be declared as a
/// constant:
///
/// ```rust
/// use recase::{EdgeRuns, StyleDescriptor, WholeCase};
///
/// const HEADER: StyleDescriptor<'static> = StyleDescriptor::new("-")
///     .with_whole_string_case(WholeCase::Upper)
///     .with_edges(EdgeRuns::Strip);
///
/// assert_eq!(HEADER.convert(" contentType "), "CONTENT-TYPE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleDescriptor<'d> {
    delimiter: &'d str,
    word_case: WordCase,
    first_word_case: Option<WordCase>,
    whole_string_case: Option<WholeCase>,
    edges: EdgeRuns,
}

impl<'d> StyleDescriptor<'d> {
    /// Create a style that joins words with `delimiter`, leaves their case alone and repeats the
    /// delimiter for every edge separator.
    pub const fn new(delimiter: &'d str) -> Self {
        Self {
            delimiter,
            word_case: WordCase::Unchanged,
            first_word_case: None,
            whole_string_case: None,
            edges: EdgeRuns::Repeat,
        }
    }

    /// Set the casing applied to every word.
    pub const fn with_word_case(mut self, word_case: WordCase) -> Self {
        self.word_case = word_case;
        self
    }

    /// Set the casing applied to the first word instead of the word case.
    pub const fn with_first_word_case(mut self, first_word_case: WordCase) -> Self {
        self.first_word_case = Some(first_word_case);
        self
    }

    /// Set the casing applied to all rendered words last.
    pub const fn with_whole_string_case(mut self, whole_string_case: WholeCase) -> Self {
        self.whole_string_case = Some(whole_string_case);
        self
    }

    /// Set how the edge separator runs are rendered.
    pub const fn with_edges(mut self, edges: EdgeRuns) -> Self {
        self.edges = edges;
        self
    }

    pub const fn delimiter(&self) -> &'d str {
        self.delimiter
    }

    pub const fn word_case(&self) -> WordCase {
        self.word_case
    }

    pub const fn first_word_case(&self) -> Option<WordCase> {
        self.first_word_case
    }

    pub const fn whole_string_case(&self) -> Option<WholeCase> {
        self.whole_string_case
    }

    pub const fn edges(&self) -> EdgeRuns {
        self.edges
    }

    /// Segment `input` and render it in this style.
    pub fn convert(&self, input: &str) -> String {
        render(&segment(input), self)
    }

    fn push_edge(&self, out: &mut String, run: &str) {
        match self.edges {
            EdgeRuns::Verbatim => out.push_str(run),
            EdgeRuns::Repeat => run.chars().for_each(|_| out.push_str(self.delimiter)),
            EdgeRuns::Strip => {}
        }
    }

    fn push_word(&self, out: &mut String, word: &str, word_case: WordCase) {
        for (index, c) in word.chars().enumerate() {
            let c = word_case.apply(index == 0, c);
            out.push(self.whole_string_case.map_or(c, |case| case.apply(c)));
        }
    }
}

/// Render segmented text in the given style.
///
/// Never fails: characters the style has no rule for are copied as they are.
pub fn render(segments: &Segments<'_>, style: &StyleDescriptor<'_>) -> String {
    let capacity = segments.leading().len()
        + segments.trailing().len()
        + segments.fragments().map(|word| word.len() + style.delimiter.len()).sum::<usize>();
    let mut out = String::with_capacity(capacity);

    style.push_edge(&mut out, segments.leading());
    for (index, word) in segments.fragments().enumerate() {
        let word_case = if index == 0 {
            style.first_word_case.unwrap_or(style.word_case)
        } else {
            out.push_str(style.delimiter);
            style.word_case
        };
        style.push_word(&mut out, word, word_case);
    }
    style.push_edge(&mut out, segments.trailing());

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_case() {
        let apply = |case: WordCase, word: &str| -> String {
            word.chars().enumerate().map(|(i, c)| case.apply(i == 0, c)).collect()
        };

        assert_eq!(apply(WordCase::Unchanged, "hELLo"), "hELLo");
        assert_eq!(apply(WordCase::Lower, "hELLo"), "hello");
        assert_eq!(apply(WordCase::Upper, "hELLo"), "HELLO");
        assert_eq!(apply(WordCase::CapitalizeFirstLetter, "hELLo"), "HELLo");
        assert_eq!(apply(WordCase::LowerFirstLetter, "HELLo"), "hELLo");
        assert_eq!(apply(WordCase::Capitalize, "hELLo"), "Hello");
        assert_eq!(apply(WordCase::Capitalize, "1ST"), "1st");
        assert_eq!(apply(WordCase::Upper, "straße"), "STRAßE");
    }

    #[test]
    fn test_join_and_first_word() {
        let style = StyleDescriptor::new("+")
            .with_word_case(WordCase::Upper)
            .with_first_word_case(WordCase::Lower);
        assert_eq!(style.convert("One two_Three"), "one+TWO+THREE");
    }

    #[test]
    fn test_whole_string_case_skips_delimiter() {
        let style = StyleDescriptor::new("x").with_whole_string_case(WholeCase::Upper);
        assert_eq!(style.convert("a_b"), "AxB");
        assert_eq!(style.convert("_a_"), "xAx");
    }

    #[test]
    fn test_edges() {
        let input = "  two words ";
        let style = StyleDescriptor::new("_");
        assert_eq!(style.convert(input), "__two_words_");
        assert_eq!(style.with_edges(EdgeRuns::Verbatim).convert(input), "  two_words ");
        assert_eq!(style.with_edges(EdgeRuns::Strip).convert(input), "two_words");
    }

    #[test]
    fn test_only_separators() {
        let style = StyleDescriptor::new("/");
        assert_eq!(style.convert("- -"), "///");
        assert_eq!(style.with_edges(EdgeRuns::Verbatim).convert("- -"), "- -");
        assert_eq!(style.with_edges(EdgeRuns::Strip).convert("- -"), "");
        assert_eq!(style.convert(""), "");
    }

    #[test]
    fn test_digit_runs_are_words() {
        let style = StyleDescriptor::new("_").with_word_case(WordCase::CapitalizeFirstLetter);
        assert_eq!(style.convert("abc1def"), "Abc_1_Def");
        assert_eq!(style.convert("abc12Def"), "Abc_12_Def");
        assert_eq!(StyleDescriptor::new("").convert("step_10_done"), "step10done");
    }

    #[test]
    fn test_accessors() {
        let style = StyleDescriptor::new("-")
            .with_first_word_case(WordCase::Capitalize)
            .with_whole_string_case(WholeCase::Lower)
            .with_edges(EdgeRuns::Strip);
        assert_eq!(style.delimiter(), "-");
        assert_eq!(style.word_case(), WordCase::Unchanged);
        assert_eq!(style.first_word_case(), Some(WordCase::Capitalize));
        assert_eq!(style.whole_string_case(), Some(WholeCase::Lower));
        assert_eq!(style.edges(), EdgeRuns::Strip);
    }
}
