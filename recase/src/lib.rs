//! Convert identifier-like strings between naming conventions.
//!
//! Every conversion runs the same two steps: [`segment`] splits the input into words, and
//! [`render`] writes the words back out according to a [`StyleDescriptor`]. The named styles live
//! in the catalog as descriptor constants and as the [`Style`] enum.
//!
//! Word boundaries come from:
//! - explicit separators (ASCII whitespace, `-`, `_`, `.`); a run of them counts once,
//! - lowercase to uppercase transitions (`fooBar`) and acronym ends (`HTTPServer`),
//! - letter/digit transitions. A digit run is a word of its own, so `test1_string2` is
//!   `test_1_string_2` in snake case and `test1String2` in camel case.
//!
//! Separator runs at the start and end of the input survive conversion: styles with a delimiter
//! repeat it once per separator character, camel and pascal case keep the original characters,
//! and sentence and title case drop them.
//!
//! ```rust
//! use recase::{Casing, Style};
//!
//! assert_eq!(recase::to_snake("TestString"), "test_string");
//! assert_eq!(recase::to_camel("  leading whitespace"), "  leadingWhitespace");
//! assert_eq!("HTTPServer".to_kebab(), "http-server");
//! assert_eq!("kebab-case".parse::<Style>().unwrap().convert("Test String"), "test-string");
//! ```
//!
//! No conversion can fail. Characters other than ASCII letters, digits and separators are
//! copied through unchanged.

mod render;
mod segment;
mod style;

pub use render::{EdgeRuns, StyleDescriptor, WholeCase, WordCase, render};
pub use segment::{Boundary, Segments, segment};
pub use style::{ParseStyleError, Style};

/// `camelCase`: `"test1_string2"` -> `"test1String2"`.
pub fn to_camel(s: &str) -> String {
    StyleDescriptor::CAMEL.convert(s)
}

/// `PascalCase`: `"test_string"` -> `"TestString"`.
pub fn to_pascal(s: &str) -> String {
    StyleDescriptor::PASCAL.convert(s)
}

/// Alias of [`to_pascal`].
pub fn to_capital(s: &str) -> String {
    to_pascal(s)
}

/// `snake_case`: `"TestString"` -> `"test_string"`.
pub fn to_snake(s: &str) -> String {
    StyleDescriptor::SNAKE.convert(s)
}

/// `kebab-case`: `"Test String"` -> `"test-string"`.
pub fn to_kebab(s: &str) -> String {
    StyleDescriptor::KEBAB.convert(s)
}

/// Alias of [`to_kebab`].
pub fn to_spinal(s: &str) -> String {
    to_kebab(s)
}

pub fn to_dot(s: &str) -> String {
    StyleDescriptor::DOT.convert(s)
}

pub fn to_path(s: &str) -> String {
    StyleDescriptor::PATH.convert(s)
}

pub fn to_backslash(s: &str) -> String {
    StyleDescriptor::BACKSLASH.convert(s)
}

/// `SCREAMING_SNAKE_CASE`: `"test-string"` -> `"TEST_STRING"`.
pub fn to_screaming_snake(s: &str) -> String {
    StyleDescriptor::SCREAMING_SNAKE.convert(s)
}

/// Alias of [`to_screaming_snake`].
pub fn to_const(s: &str) -> String {
    to_screaming_snake(s)
}

pub fn to_screaming_kebab(s: &str) -> String {
    StyleDescriptor::SCREAMING_KEBAB.convert(s)
}

/// Lowercase words joined by `delimiter`. The delimiter is copied verbatim and repeated for every
/// separator at the edges of the input.
pub fn to_delimited(s: &str, delimiter: &str) -> String {
    StyleDescriptor::new(delimiter).with_whole_string_case(WholeCase::Lower).convert(s)
}

/// Uppercase words joined by `delimiter`. See [`to_delimited`].
pub fn to_screaming_delimited(s: &str, delimiter: &str) -> String {
    StyleDescriptor::new(delimiter).with_whole_string_case(WholeCase::Upper).convert(s)
}

/// `Sentence case`: `"TEST_STRING"` -> `"Test string"`.
pub fn to_sentence(s: &str) -> String {
    StyleDescriptor::SENTENCE.convert(s)
}

/// `Title Case`: `"test_string_multiple_words"` -> `"Test String Multiple Words"`.
pub fn to_title(s: &str) -> String {
    StyleDescriptor::TITLE.convert(s)
}

/// Strip leading and trailing whitespace, nothing else.
pub fn to_trim(s: &str) -> String {
    s.trim().to_owned()
}

/// Uppercase the whole string without segmenting it.
pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Lowercase the whole string without segmenting it.
pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Drop every character outside `[A-Za-z0-9]`.
pub fn to_alphanumeric(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Sealed trait to prevent outside code from implementing [`Casing`].
mod private {
    pub trait Sealed {}

    impl Sealed for str {}
}

/// Method syntax for the conversions: `"HttpServer".to_snake()`.
pub trait Casing: private::Sealed {
    fn to_camel(&self) -> String;
    fn to_pascal(&self) -> String;
    fn to_capital(&self) -> String;
    fn to_snake(&self) -> String;
    fn to_kebab(&self) -> String;
    fn to_spinal(&self) -> String;
    fn to_dot(&self) -> String;
    fn to_path(&self) -> String;
    fn to_backslash(&self) -> String;
    fn to_screaming_snake(&self) -> String;
    fn to_const(&self) -> String;
    fn to_screaming_kebab(&self) -> String;
    fn to_delimited(&self, delimiter: &str) -> String;
    fn to_screaming_delimited(&self, delimiter: &str) -> String;
    fn to_sentence(&self) -> String;
    fn to_title(&self) -> String;
    fn to_trim(&self) -> String;
    fn to_upper(&self) -> String;
    fn to_lower(&self) -> String;
    fn to_alphanumeric(&self) -> String;
    /// Convert to any catalog style.
    fn to_style(&self, style: Style) -> String;
}

impl Casing for str {
    fn to_camel(&self) -> String {
        to_camel(self)
    }

    fn to_pascal(&self) -> String {
        to_pascal(self)
    }

    fn to_capital(&self) -> String {
        to_capital(self)
    }

    fn to_snake(&self) -> String {
        to_snake(self)
    }

    fn to_kebab(&self) -> String {
        to_kebab(self)
    }

    fn to_spinal(&self) -> String {
        to_spinal(self)
    }

    fn to_dot(&self) -> String {
        to_dot(self)
    }

    fn to_path(&self) -> String {
        to_path(self)
    }

    fn to_backslash(&self) -> String {
        to_backslash(self)
    }

    fn to_screaming_snake(&self) -> String {
        to_screaming_snake(self)
    }

    fn to_const(&self) -> String {
        to_const(self)
    }

    fn to_screaming_kebab(&self) -> String {
        to_screaming_kebab(self)
    }

    fn to_delimited(&self, delimiter: &str) -> String {
        to_delimited(self, delimiter)
    }

    fn to_screaming_delimited(&self, delimiter: &str) -> String {
        to_screaming_delimited(self, delimiter)
    }

    fn to_sentence(&self) -> String {
        to_sentence(self)
    }

    fn to_title(&self) -> String {
        to_title(self)
    }

    fn to_trim(&self) -> String {
        to_trim(self)
    }

    fn to_upper(&self) -> String {
        to_upper(self)
    }

    fn to_lower(&self) -> String {
        to_lower(self)
    }

    fn to_alphanumeric(&self) -> String {
        to_alphanumeric(self)
    }

    fn to_style(&self, style: Style) -> String {
        style.convert(self)
    }
}
