//! The style catalog.
//!
//! Every named style is either a [`StyleDescriptor`] constant or one of the four whole-string
//! transforms that bypass segmentation (trim, upper, lower, alphanumeric).

use std::{fmt, str::FromStr};

use crate::render::{EdgeRuns, StyleDescriptor, WholeCase, WordCase};

impl StyleDescriptor<'static> {
    /// `camelCase`. Edge separators are kept as they are.
    pub const CAMEL: Self = Self::new("")
        .with_word_case(WordCase::CapitalizeFirstLetter)
        .with_first_word_case(WordCase::LowerFirstLetter)
        .with_edges(EdgeRuns::Verbatim);

    /// `PascalCase`. Edge separators are kept as they are.
    pub const PASCAL: Self = Self::new("")
        .with_word_case(WordCase::CapitalizeFirstLetter)
        .with_edges(EdgeRuns::Verbatim);

    /// `snake_case`
    pub const SNAKE: Self = Self::new("_").with_whole_string_case(WholeCase::Lower);

    /// `kebab-case`
    pub const KEBAB: Self = Self::new("-").with_whole_string_case(WholeCase::Lower);

    /// `dot.case`
    pub const DOT: Self = Self::new(".").with_whole_string_case(WholeCase::Lower);

    /// `path/case`
    pub const PATH: Self = Self::new("/").with_whole_string_case(WholeCase::Lower);

    /// `backslash\case`
    pub const BACKSLASH: Self = Self::new("\\").with_whole_string_case(WholeCase::Lower);

    /// `SCREAMING_SNAKE_CASE`
    pub const SCREAMING_SNAKE: Self = Self::new("_").with_whole_string_case(WholeCase::Upper);

    /// `SCREAMING-KEBAB-CASE`
    pub const SCREAMING_KEBAB: Self = Self::new("-").with_whole_string_case(WholeCase::Upper);

    /// `Sentence case`. Edge separators are dropped.
    pub const SENTENCE: Self = Self::new(" ")
        .with_word_case(WordCase::Lower)
        .with_first_word_case(WordCase::Capitalize)
        .with_edges(EdgeRuns::Strip);

    /// `Title Case`. Edge separators are dropped.
    pub const TITLE: Self =
        Self::new(" ").with_word_case(WordCase::Capitalize).with_edges(EdgeRuns::Strip);
}

/// A named output convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Camel,
    /// Also known as capital case.
    Pascal,
    Snake,
    /// Also known as spinal case.
    Kebab,
    Dot,
    Path,
    Backslash,
    /// Also known as const case.
    ScreamingSnake,
    ScreamingKebab,
    Sentence,
    Title,
    /// Strip surrounding whitespace only.
    Trim,
    /// Uppercase the whole string.
    Upper,
    /// Lowercase the whole string.
    Lower,
    /// Drop every character outside `[A-Za-z0-9]`.
    Alphanumeric,
}

impl Style {
    pub const ALL: [Self; 15] = [
        Self::Camel,
        Self::Pascal,
        Self::Snake,
        Self::Kebab,
        Self::Dot,
        Self::Path,
        Self::Backslash,
        Self::ScreamingSnake,
        Self::ScreamingKebab,
        Self::Sentence,
        Self::Title,
        Self::Trim,
        Self::Upper,
        Self::Lower,
        Self::Alphanumeric,
    ];

    /// The canonical name of the style. [`Style::from_str`] accepts it back.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Pascal => "pascal",
            Self::Snake => "snake",
            Self::Kebab => "kebab",
            Self::Dot => "dot",
            Self::Path => "path",
            Self::Backslash => "backslash",
            Self::ScreamingSnake => "screaming_snake",
            Self::ScreamingKebab => "screaming_kebab",
            Self::Sentence => "sentence",
            Self::Title => "title",
            Self::Trim => "trim",
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Alphanumeric => "alphanumeric",
        }
    }

    /// The descriptor used to render this style, or `None` for the whole-string transforms that
    /// do not segment their input.
    pub fn descriptor(self) -> Option<&'static StyleDescriptor<'static>> {
        match self {
            Self::Camel => Some(&StyleDescriptor::CAMEL),
            Self::Pascal => Some(&StyleDescriptor::PASCAL),
            Self::Snake => Some(&StyleDescriptor::SNAKE),
            Self::Kebab => Some(&StyleDescriptor::KEBAB),
            Self::Dot => Some(&StyleDescriptor::DOT),
            Self::Path => Some(&StyleDescriptor::PATH),
            Self::Backslash => Some(&StyleDescriptor::BACKSLASH),
            Self::ScreamingSnake => Some(&StyleDescriptor::SCREAMING_SNAKE),
            Self::ScreamingKebab => Some(&StyleDescriptor::SCREAMING_KEBAB),
            Self::Sentence => Some(&StyleDescriptor::SENTENCE),
            Self::Title => Some(&StyleDescriptor::TITLE),
            Self::Trim | Self::Upper | Self::Lower | Self::Alphanumeric => None,
        }
    }

    /// Convert `input` to this style.
    pub fn convert(self, input: &str) -> String {
        log::trace!("converting {} bytes to {self}", input.len());

        match self {
            Self::Camel => crate::to_camel(input),
            Self::Pascal => crate::to_pascal(input),
            Self::Snake => crate::to_snake(input),
            Self::Kebab => crate::to_kebab(input),
            Self::Dot => crate::to_dot(input),
            Self::Path => crate::to_path(input),
            Self::Backslash => crate::to_backslash(input),
            Self::ScreamingSnake => crate::to_screaming_snake(input),
            Self::ScreamingKebab => crate::to_screaming_kebab(input),
            Self::Sentence => crate::to_sentence(input),
            Self::Title => crate::to_title(input),
            Self::Trim => crate::to_trim(input),
            Self::Upper => crate::to_upper(input),
            Self::Lower => crate::to_lower(input),
            Self::Alphanumeric => crate::to_alphanumeric(input),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a style name is not recognised.
#[derive(Clone, PartialEq, Eq)]
pub enum ParseStyleError {
    /// The name had no word content.
    Empty,
    /// The name did not match any style or alias.
    Unknown(String),
}

impl std::error::Error for ParseStyleError {}

impl fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty style name"),
            Self::Unknown(name) => write!(f, "Unknown case style: {}", name),
        }
    }
}

impl fmt::Debug for ParseStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    /// Parse a style name.
    ///
    /// Names are compared after snake casing them and dropping underscores and a trailing
    /// `case`, so `"kebab-case"`, `"KebabCase"` and `"kebabcase"` all name [`Style::Kebab`].
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized = crate::to_snake(name).replace('_', "");
        let normalized = normalized.strip_suffix("case").unwrap_or(&normalized);

        let style = match normalized {
            "" => return Err(ParseStyleError::Empty),
            "camel" | "lowercamel" => Self::Camel,
            "pascal" | "capital" | "uppercamel" => Self::Pascal,
            "snake" => Self::Snake,
            "kebab" | "spinal" | "dash" => Self::Kebab,
            "dot" => Self::Dot,
            "path" | "slash" => Self::Path,
            "backslash" => Self::Backslash,
            "screamingsnake" | "const" | "constant" | "uppersnake" => Self::ScreamingSnake,
            "screamingkebab" | "cobol" | "upperkebab" => Self::ScreamingKebab,
            "sentence" => Self::Sentence,
            "title" => Self::Title,
            "trim" => Self::Trim,
            "upper" => Self::Upper,
            "lower" => Self::Lower,
            "alphanumeric" | "alphanum" => Self::Alphanumeric,
            _ => {
                log::debug!("rejected case style name {name:?}");
                return Err(ParseStyleError::Unknown(name.to_owned()));
            }
        };

        Ok(style)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Style {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Style {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
