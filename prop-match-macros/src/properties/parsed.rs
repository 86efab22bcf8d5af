use std::collections::HashSet;

use convert_case::{Case, Casing};
use proc_macro2::Span;
use syn::{
    ext::IdentExt,
    meta::ParseNestedMeta,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Data, DeriveInput, Error, Fields, Generics, Ident, LitStr, Member, Path,
    Result as ParseResult, Type,
};

use crate::misc::parse_case;

/// Name of the synthetic property that is generated for every type.
const TYPE_PROPERTY: &str = "type";

/// Parsed input of the `derive(Properties)` macro
pub(crate) struct Parsed {
    pub ident: Ident,
    pub generics: Generics,
    pub properties: Vec<Property>,
}

/// Property that is exposed by the derived implementation
pub(crate) struct Property {
    pub name: String,
    pub span: Span,
    pub accessor: Accessor,
}

/// Way the value of a property is read
pub(crate) enum Accessor {
    Field { member: Member, ty: Type },
    Getter(Path),
    TryGetter(Path),
}

impl Parsed {
    fn parse_getter(meta: &ParseNestedMeta<'_>) -> ParseResult<Option<Accessor>> {
        if meta.path.is_ident("getter") {
            Ok(Some(Accessor::Getter(meta.value()?.parse()?)))
        } else if meta.path.is_ident("try_getter") {
            Ok(Some(Accessor::TryGetter(meta.value()?.parse()?)))
        } else {
            Ok(None)
        }
    }

    fn parse_computed(meta: &ParseNestedMeta<'_>) -> ParseResult<Property> {
        let mut name = Option::<LitStr>::None;
        let mut accessor = None;

        meta.parse_nested_meta(|inner| {
            if inner.path.is_ident("name") {
                name = Some(inner.value()?.parse()?);
            } else if let Some(getter) = Self::parse_getter(&inner)? {
                accessor = Some(getter);
            } else {
                return Err(inner.error(
                    "Unsupported computed property attribute, expected `name`, `getter` or `try_getter`",
                ));
            }

            Ok(())
        })?;

        let name = name.ok_or_else(|| meta.error("Computed property is missing a `name`"))?;
        let accessor = accessor
            .ok_or_else(|| meta.error("Computed property is missing a `getter` or `try_getter`"))?;

        Ok(Property {
            name: name.value(),
            span: name.span(),
            accessor,
        })
    }

    fn validate(properties: &[Property]) -> ParseResult<()> {
        let mut names = HashSet::new();

        for property in properties {
            if property.name.is_empty() {
                return Err(Error::new(property.span, "Property name must not be empty"));
            }

            if property.name == TYPE_PROPERTY {
                return Err(Error::new(
                    property.span,
                    "The property name `type` is reserved for the type of the object",
                ));
            }

            if !names.insert(property.name.as_str()) {
                return Err(Error::new(
                    property.span,
                    format!("Property `{}` is defined more than once", property.name),
                ));
            }
        }

        Ok(())
    }
}

impl Parse for Parsed {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let DeriveInput {
            attrs,
            ident,
            generics,
            data,
            ..
        } = input.parse()?;

        let fields = match data {
            Data::Struct(s) => match s.fields {
                Fields::Named(fields) => fields.named,
                Fields::Unit => Punctuated::new(),
                Fields::Unnamed(fields) => {
                    return Err(Error::new_spanned(
                        fields,
                        "Properties can only be derived for structs with named fields!",
                    ))
                }
            },
            Data::Enum(e) => {
                return Err(Error::new(
                    e.enum_token.span,
                    "Properties can only be derived for structs!",
                ))
            }
            Data::Union(u) => {
                return Err(Error::new(
                    u.union_token.span,
                    "Properties can only be derived for structs!",
                ))
            }
        };

        let mut rename_all = Option::<Case>::None;
        let mut computed = Vec::new();

        for attr in attrs.iter().filter(|a| a.path().is_ident("properties")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    let lit = meta.value()?.parse::<LitStr>()?;
                    let Some(case) = parse_case(&lit.value()) else {
                        return Err(Error::new(
                            lit.span(),
                            format!("Unknown case `{}` for `rename_all`", lit.value()),
                        ));
                    };

                    rename_all = Some(case);
                } else if meta.path.is_ident("computed") {
                    computed.push(Self::parse_computed(&meta)?);
                } else {
                    return Err(meta.error(
                        "Unsupported properties attribute, expected `rename_all` or `computed`",
                    ));
                }

                Ok(())
            })?;
        }

        let mut properties = Vec::new();
        for field in fields {
            let mut rename = Option::<LitStr>::None;
            let mut skip = false;
            let mut getter = None;

            for attr in field.attrs.iter().filter(|a| a.path().is_ident("property")) {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        rename = Some(meta.value()?.parse()?);
                    } else if meta.path.is_ident("skip") {
                        skip = true;
                    } else if let Some(accessor) = Self::parse_getter(&meta)? {
                        getter = Some(accessor);
                    } else {
                        return Err(meta.error(
                            "Unsupported property attribute, expected `rename`, `skip`, `getter` or `try_getter`",
                        ));
                    }

                    Ok(())
                })?;
            }

            if skip {
                continue;
            }

            let Some(ident) = field.ident else {
                return Err(Error::new_spanned(field.ty, "Expected a named field!"));
            };

            let (name, span) = match rename {
                Some(lit) => (lit.value(), lit.span()),
                None => {
                    let name = ident.unraw().to_string();
                    let name = match rename_all {
                        Some(case) => name.to_case(case),
                        None => name,
                    };

                    (name, ident.span())
                }
            };

            let accessor = getter.unwrap_or(Accessor::Field {
                member: Member::Named(ident),
                ty: field.ty,
            });

            properties.push(Property {
                name,
                span,
                accessor,
            });
        }

        properties.extend(computed);

        Self::validate(&properties)?;

        Ok(Self {
            ident,
            generics,
            properties,
        })
    }
}
