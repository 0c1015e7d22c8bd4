use proc_macro::TokenStream;
use syn::{Item, parse_macro_input};

use crate::expand::NamedAttr;

mod expand;

/// This macro renders the names of a struct or enum, and of its fields or variants, in a case
/// style, and exposes them as constants and methods.
///
/// # Attributes
/// - `style`: the style used for the type and variant names. Any name `recase::Style` parses
///   (`"kebab"`, `"SCREAMING_SNAKE_CASE"`, ...). Defaults to snake case.
/// - `field_style`: the style used for struct field names. Defaults to `style`.
/// - `prefix`: prepended to every rendered type and variant name before conversion.
/// - `rename`: the name of the type itself, used verbatim.
///
/// Fields and variants accept `#[case(rename = "...")]`, and variants accept any number of
/// `#[case(alias = "...")]` that `from_name` also recognises.
///
/// # Generated items
/// - Structs: `NAME`, plus `FIELD_NAMES` when the fields are named.
/// - Enums: `NAME`, `NAMES`, `fn name(&self)`, plus `fn from_name(&str)` when every variant is a
///   unit variant.
#[proc_macro_attribute]
pub fn named(attr: TokenStream, item: TokenStream) -> TokenStream {
    // NOTE: We use `proc_macro_attribute` here because the `#[case]` helper attributes have to be
    // stripped from the item.
    let mut input = parse_macro_input!(item as Item);

    let attributes: NamedAttr = match syn::parse(attr) {
        Ok(v) => v,
        Err(e) => {
            return e.to_compile_error().into();
        }
    };

    expand::expand(attributes, &mut input).unwrap_or_else(|err| err.into_compile_error()).into()
}
