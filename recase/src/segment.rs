//! Boundary segmentation.
//!
//! Splits a raw string into word fragments and records what separates them. Only ASCII letters
//! and digits are word characters; the explicit separators are ASCII whitespace, `-`, `_` and
//! `.`. Every other character (including all non-ASCII) is a symbol: it never starts a new word
//! and is carried inside the fragment it touches.

/// Classification of a single character for word detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    Lower,
    Upper,
    Digit,
    Separator,
    Symbol,
}

const fn build_class_table() -> [CharClass; 128] {
    let mut table = [CharClass::Symbol; 128];
    let mut i = 0;
    while i < table.len() {
        table[i] = match i as u8 {
            b'a'..=b'z' => CharClass::Lower,
            b'A'..=b'Z' => CharClass::Upper,
            b'0'..=b'9' => CharClass::Digit,
            b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c | b'-' | b'_' | b'.' => CharClass::Separator,
            _ => CharClass::Symbol,
        };
        i += 1;
    }
    table
}

/// Class of every ASCII character, built at compile time.
static CLASS_TABLE: [CharClass; 128] = build_class_table();

pub(crate) fn classify(c: char) -> CharClass {
    if c.is_ascii() { CLASS_TABLE[c as usize] } else { CharClass::Symbol }
}

pub(crate) fn is_separator(c: char) -> bool {
    classify(c) == CharClass::Separator
}

/// What sits between two consecutive fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary<'a> {
    /// A run of one or more explicit separator characters, as it appeared in the input.
    Separator(&'a str),
    /// A lowercase to uppercase transition (`fooBar`), or the end of an acronym (`HTTPServer`).
    Case,
    /// A letter/digit transition (`abc1`, `1abc`).
    Digit,
}

impl Boundary<'_> {
    /// The number of separator characters at this boundary. Zero for case and digit transitions.
    pub fn delimiter_count(&self) -> usize {
        match self {
            Self::Separator(run) => run.chars().count(),
            Self::Case | Self::Digit => 0,
        }
    }
}

/// The result of [`segment`]: the fragments of a string, the boundaries between them and the
/// separator runs at both edges.
///
/// All slices borrow from the segmented input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'a> {
    leading: &'a str,
    trailing: &'a str,
    /// The input without its edge runs.
    body: &'a str,
    /// Byte ranges of the fragments within `body`.
    spans: Vec<(usize, usize)>,
    /// `boundaries[i]` separates `spans[i]` and `spans[i + 1]`.
    boundaries: Vec<Boundary<'a>>,
}

impl<'a> Segments<'a> {
    fn edges_only(run: &'a str) -> Self {
        Self { leading: run, trailing: "", body: "", spans: Vec::new(), boundaries: Vec::new() }
    }

    /// The separator run before the first fragment. For an input made only of separators this
    /// is the whole input.
    pub fn leading(&self) -> &'a str {
        self.leading
    }

    /// The separator run after the last fragment.
    pub fn trailing(&self) -> &'a str {
        self.trailing
    }

    /// Whether the input contained no word content at all.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The words, in input order.
    pub fn fragments(&self) -> impl ExactSizeIterator<Item = &'a str> + '_ {
        self.spans.iter().map(|&(start, end)| &self.body[start..end])
    }

    pub fn boundaries(&self) -> &[Boundary<'a>] {
        &self.boundaries
    }

    fn split(&mut self, start: usize, end: usize, boundary: Boundary<'a>) {
        self.spans.push((start, end));
        self.boundaries.push(boundary);
    }
}

/// Decide whether a boundary falls between the previous character and the current one.
fn boundary_before(
    prev: CharClass,
    current: CharClass,
    next: Option<CharClass>,
) -> Option<Boundary<'static>> {
    use CharClass::{Digit, Lower, Upper};

    match (prev, current) {
        (Lower, Upper) => Some(Boundary::Case),
        (Upper, Upper) if next == Some(Lower) => Some(Boundary::Case),
        (Lower | Upper, Digit) | (Digit, Lower | Upper) => Some(Boundary::Digit),
        _ => None,
    }
}

/// Split `input` into fragments.
///
/// Explicit separators always end a fragment and consecutive separators collapse into a single
/// [`Boundary::Separator`]. Inside a run of non-separators, case and letter/digit transitions
/// produce [`Boundary::Case`] and [`Boundary::Digit`]. Separator runs at the edges are kept
/// apart in [`Segments::leading`] and [`Segments::trailing`].
///
/// # Example
/// ```rust
/// use recase::{Boundary, segment};
///
/// let segments = segment("  parseHTTPResponse_v2");
/// assert_eq!(segments.leading(), "  ");
/// assert_eq!(segments.fragments().collect::<Vec<_>>(), ["parse", "HTTP", "Response", "v", "2"]);
/// assert_eq!(segments.boundaries()[2], Boundary::Separator("_"));
/// assert_eq!(segments.boundaries()[3], Boundary::Digit);
/// ```
pub fn segment(input: &str) -> Segments<'_> {
    let body = input.trim_start_matches(is_separator);
    let leading = &input[..input.len() - body.len()];
    if body.is_empty() {
        return Segments::edges_only(leading);
    }

    let trimmed = body.trim_end_matches(is_separator);
    let trailing = &body[trimmed.len()..];
    let body = trimmed;

    let mut segments = Segments {
        leading,
        trailing,
        body,
        spans: Vec::new(),
        boundaries: Vec::new(),
    };

    let mut chars = body.char_indices().peekable();
    let mut fragment_start = 0;
    let mut separator_start = None;
    let mut prev = None;

    while let Some((index, c)) = chars.next() {
        let class = classify(c);

        if class == CharClass::Separator {
            if separator_start.is_none() {
                separator_start = Some(index);
            }
            prev = None;
            continue;
        }

        if let Some(start) = separator_start.take() {
            segments.split(fragment_start, start, Boundary::Separator(&body[start..index]));
            fragment_start = index;
        } else if let Some(prev) = prev {
            let next = chars.peek().map(|&(_, c)| classify(c));
            if let Some(boundary) = boundary_before(prev, class, next) {
                segments.split(fragment_start, index, boundary);
                fragment_start = index;
            }
        }

        prev = Some(class);
    }
    segments.spans.push((fragment_start, body.len()));

    segments
}
