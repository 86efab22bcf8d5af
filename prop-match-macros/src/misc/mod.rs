use convert_case::Case;
use proc_macro2::Ident;
use quote::format_ident;

/// Parse the name of a `rename_all` case as it is used by serde.
pub(crate) fn parse_case(name: &str) -> Option<Case> {
    match name {
        "lowercase" => Some(Case::Flat),
        "UPPERCASE" => Some(Case::UpperFlat),
        "camelCase" => Some(Case::Camel),
        "PascalCase" => Some(Case::Pascal),
        "snake_case" => Some(Case::Snake),
        "SCREAMING_SNAKE_CASE" => Some(Case::UpperSnake),
        "kebab-case" => Some(Case::Kebab),
        "SCREAMING-KEBAB-CASE" => Some(Case::UpperKebab),
        _ => None,
    }
}

#[cfg(feature = "force-name")]
pub(crate) fn ident_prop_match() -> Ident {
    format_ident!("prop_match")
}

#[cfg(not(feature = "force-name"))]
pub(crate) fn ident_prop_match() -> Ident {
    use proc_macro_crate::{crate_name, FoundCrate};

    match crate_name("prop-match") {
        Ok(FoundCrate::Itself) => format_ident!("crate"),
        Ok(FoundCrate::Name(name)) => format_ident!("{name}"),
        Err(_) => format_ident!("prop_match"),
    }
}
