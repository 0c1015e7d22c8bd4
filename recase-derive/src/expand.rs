use std::collections::HashMap;

use darling::{FromField, FromMeta, FromVariant};
use proc_macro2::TokenStream;
use quote::quote;
use recase::Style;
use syn::{Field, Fields, Ident, Item, ItemEnum, ItemStruct, LitStr, Result, Variant, ext::IdentExt};

/// The name of the per-field and per-variant attribute.
const CASE_ATTR_NAME: &str = "case";

/// The style used when the attribute does not name one.
const DEFAULT_STYLE: Style = Style::Snake;

#[derive(FromMeta, Debug)]
#[darling(derive_syn_parse)]
pub(super) struct NamedAttr {
    /// The style for the type and variant names.
    style: Option<LitStr>,
    /// The style for struct field names. Falls back to `style`.
    field_style: Option<LitStr>,
    /// Prepended to the type and variant names before conversion.
    prefix: Option<LitStr>,
    /// The name of the type itself, used verbatim.
    rename: Option<LitStr>,
}

fn parse_style(lit: Option<&LitStr>) -> Result<Option<Style>> {
    lit.map(|lit| lit.value().parse().map_err(|err| syn::Error::new_spanned(lit, err))).transpose()
}

/// Renders identifiers with a style and an optional prefix.
struct Namer {
    style: Style,
    prefix: Option<String>,
}

impl Namer {
    fn name(&self, ident: &Ident, rename: Option<String>) -> String {
        if let Some(rename) = rename {
            return rename;
        }

        let ident = ident.unraw().to_string();
        match &self.prefix {
            Some(prefix) => self.style.convert(&format!("{prefix}_{ident}")),
            None => self.style.convert(&ident),
        }
    }
}

/// Tracks rendered names and rejects the second item to produce one.
#[derive(Default)]
struct Names {
    seen: HashMap<String, Ident>,
}

impl Names {
    fn insert(&mut self, name: &str, ident: &Ident) -> Result<()> {
        if let Some(first) = self.seen.get(name) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("name '{name}' is already used by `{first}`"),
            ));
        }

        self.seen.insert(name.to_owned(), ident.clone());
        Ok(())
    }
}

#[derive(FromVariant)]
#[darling(attributes(case))]
struct CaseVariant {
    /// The identifier of the variant.
    ident: Ident,
    /// The name override for the variant.
    rename: Option<String>,
    /// Extra names accepted by `from_name`.
    #[darling(multiple)]
    alias: Vec<String>,
}

/// The rendered names of a single enum variant.
struct VariantBuilder {
    ident: Ident,
    /// Matches the variant regardless of its fields.
    pattern: TokenStream,
    name: String,
    aliases: Vec<String>,
    is_unit: bool,
}

impl VariantBuilder {
    fn try_from(variant: &Variant, namer: &Namer) -> Result<Self> {
        let case_variant = CaseVariant::from_variant(variant)?;
        let ident = case_variant.ident;

        let pattern = match &variant.fields {
            Fields::Unit => quote! { Self::#ident },
            Fields::Named(_) => quote! { Self::#ident { .. } },
            Fields::Unnamed(_) => quote! { Self::#ident(..) },
        };

        Ok(Self {
            name: namer.name(&ident, case_variant.rename),
            aliases: case_variant.alias,
            is_unit: matches!(variant.fields, Fields::Unit),
            ident,
            pattern,
        })
    }

    /// Build the `name()` match arm for the variant.
    fn build_name_arm(&self) -> TokenStream {
        let pattern = &self.pattern;
        let name = &self.name;

        quote! { #pattern => #name }
    }

    /// Build the `from_name()` match arm for the variant.
    fn build_from_name_arm(&self) -> TokenStream {
        let ident = &self.ident;
        let name = &self.name;
        let aliases = &self.aliases;

        quote! { #name #(| #aliases)* => Some(Self::#ident) }
    }
}

#[derive(FromField)]
#[darling(attributes(case))]
struct CaseField {
    /// The identifier of the field.
    ident: Option<Ident>,
    /// The name override for the field.
    rename: Option<String>,
}

fn field_name(field: &Field, namer: &Namer) -> Result<Option<(Ident, String)>> {
    let case_field = CaseField::from_field(field)?;

    match case_field.ident {
        Some(ident) => {
            let name = namer.name(&ident, case_field.rename);
            Ok(Some((ident, name)))
        }
        None if case_field.rename.is_some() => {
            Err(syn::Error::new_spanned(field, "`rename` is only supported on named fields"))
        }
        None => Ok(None),
    }
}

fn strip_case_attrs(attrs: &mut Vec<syn::Attribute>) {
    attrs.retain(|attr| !attr.path().is_ident(CASE_ATTR_NAME));
}

fn expand_enum(named_attr: &NamedAttr, input: &mut ItemEnum) -> Result<TokenStream> {
    let style = parse_style(named_attr.style.as_ref())?.unwrap_or(DEFAULT_STYLE);
    let namer = Namer { style, prefix: named_attr.prefix.as_ref().map(LitStr::value) };

    let mut variants = Vec::with_capacity(input.variants.len());
    let mut names = Names::default();

    for variant in input.variants.iter_mut() {
        let builder = VariantBuilder::try_from(variant, &namer)?;

        names.insert(&builder.name, &builder.ident)?;
        for alias in &builder.aliases {
            names.insert(alias, &builder.ident)?;
        }

        variants.push(builder);

        // Remove the case attribute from the variant.
        strip_case_attrs(&mut variant.attrs);
    }

    let all_unit = variants.iter().all(|variant| variant.is_unit);
    if !all_unit {
        if let Some(variant) = variants.iter().find(|variant| !variant.aliases.is_empty()) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "`alias` is only supported when every variant is a unit variant",
            ));
        }
    }

    let vis = &input.vis;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let type_name = namer.name(ident, named_attr.rename.as_ref().map(LitStr::value));
    let variant_names = variants.iter().map(|variant| &variant.name);
    let name_arms = variants.iter().map(VariantBuilder::build_name_arm);

    let from_name = if all_unit {
        let from_name_arms = variants.iter().map(VariantBuilder::build_from_name_arm);
        quote! {
            /// Look up a variant by its rendered name or one of its aliases.
            #vis fn from_name(name: &str) -> Option<Self> {
                match name {
                    #(#from_name_arms,)*
                    _ => None,
                }
            }
        }
    } else {
        TokenStream::new()
    };

    let output = quote! {
        #input

        impl #impl_generics #ident #ty_generics #where_clause {
            /// The rendered name of the type.
            #vis const NAME: &'static str = #type_name;

            /// The rendered names of the variants, in declaration order.
            #vis const NAMES: &'static [&'static str] = &[#(#variant_names),*];

            /// The rendered name of this variant.
            #vis const fn name(&self) -> &'static str {
                match *self {
                    #(#name_arms,)*
                }
            }

            #from_name
        }
    };

    Ok(output)
}

fn expand_struct(named_attr: &NamedAttr, input: &mut ItemStruct) -> Result<TokenStream> {
    let style = parse_style(named_attr.style.as_ref())?.unwrap_or(DEFAULT_STYLE);
    let field_style = parse_style(named_attr.field_style.as_ref())?.unwrap_or(style);

    let namer = Namer { style, prefix: named_attr.prefix.as_ref().map(LitStr::value) };
    let field_namer = Namer { style: field_style, prefix: None };

    let mut field_names = Vec::with_capacity(input.fields.len());
    let mut names = Names::default();

    for field in input.fields.iter_mut() {
        if let Some((ident, name)) = field_name(field, &field_namer)? {
            names.insert(&name, &ident)?;
            field_names.push(name);
        }

        // Remove the case attribute from the field.
        strip_case_attrs(&mut field.attrs);
    }

    let vis = &input.vis;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let type_name = namer.name(ident, named_attr.rename.as_ref().map(LitStr::value));

    let field_names_const = if let Fields::Named(_) = &input.fields {
        quote! {
            /// The rendered names of the fields, in declaration order.
            #vis const FIELD_NAMES: &'static [&'static str] = &[#(#field_names),*];
        }
    } else {
        TokenStream::new()
    };

    let output = quote! {
        #input

        impl #impl_generics #ident #ty_generics #where_clause {
            /// The rendered name of the type.
            #vis const NAME: &'static str = #type_name;

            #field_names_const
        }
    };

    Ok(output)
}

pub(super) fn expand(named_attr: NamedAttr, input: &mut Item) -> Result<TokenStream> {
    match input {
        Item::Enum(item) => expand_enum(&named_attr, item),
        Item::Struct(item) => expand_struct(&named_attr, item),
        other => Err(syn::Error::new_spanned(
            other,
            "#[named] can only be applied to structs and enums",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand_err(attr: TokenStream, mut item: Item) -> String {
        let attr: NamedAttr = syn::parse2(attr).unwrap();
        expand(attr, &mut item).unwrap_err().to_string()
    }

    #[test]
    fn test_strips_case_attrs() {
        let attr: NamedAttr = syn::parse2(quote! { style = "kebab" }).unwrap();
        let mut item: Item = parse_quote! {
            enum Mode {
                #[case(rename = "fast")]
                Quick,
                Slow,
            }
        };

        let output = expand(attr, &mut item).unwrap().to_string().replace(' ', "");
        assert!(!output.contains("#[case"), "{output}");
        assert!(output.contains("\"fast\""), "{output}");
        assert!(output.contains("\"slow\""), "{output}");
        assert!(output.contains("fnfrom_name"), "{output}");
    }

    #[test]
    fn test_no_from_name_with_fields() {
        let attr: NamedAttr = syn::parse2(TokenStream::new()).unwrap();
        let mut item: Item = parse_quote! {
            enum Shape {
                Circle(f64),
                Square { side: f64 },
            }
        };

        let output = expand(attr, &mut item).unwrap().to_string().replace(' ', "");
        assert!(output.contains("Self::Circle(..)"), "{output}");
        assert!(output.contains("Self::Square{..}"), "{output}");
        assert!(!output.contains("from_name"), "{output}");
    }

    #[test]
    fn test_unknown_style() {
        let err = expand_err(quote! { style = "hungarian" }, parse_quote! { struct Foo; });
        assert_eq!(err, "Unknown case style: hungarian");

        let err = expand_err(quote! { field_style = "" }, parse_quote! { struct Foo; });
        assert_eq!(err, "Empty style name");
    }

    #[test]
    fn test_duplicate_names() {
        let err = expand_err(
            quote! { style = "snake" },
            parse_quote! {
                enum Key {
                    HttpServer,
                    HTTPServer,
                }
            },
        );
        assert_eq!(err, "name 'http_server' is already used by `HttpServer`");

        let err = expand_err(
            TokenStream::new(),
            parse_quote! {
                enum Key {
                    Up,
                    #[case(alias = "up")]
                    Down,
                }
            },
        );
        assert_eq!(err, "name 'up' is already used by `Up`");
    }

    #[test]
    fn test_alias_requires_unit_variants() {
        let err = expand_err(
            TokenStream::new(),
            parse_quote! {
                enum Key {
                    #[case(alias = "letter")]
                    Char(char),
                    Enter,
                }
            },
        );
        assert_eq!(err, "`alias` is only supported when every variant is a unit variant");
    }

    #[test]
    fn test_rejects_other_items() {
        let err = expand_err(TokenStream::new(), parse_quote! { union Bits { a: u32, b: f32 } });
        assert_eq!(err, "#[named] can only be applied to structs and enums");

        let err = expand_err(TokenStream::new(), parse_quote! { fn run() {} });
        assert_eq!(err, "#[named] can only be applied to structs and enums");
    }

    #[test]
    fn test_rename_on_tuple_field() {
        let err = expand_err(
            TokenStream::new(),
            parse_quote! { struct Id(#[case(rename = "id")] u64); },
        );
        assert_eq!(err, "`rename` is only supported on named fields");
    }
}
