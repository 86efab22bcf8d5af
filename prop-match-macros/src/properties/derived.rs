use proc_macro2::{Ident, TokenStream};
use quote::{quote, ToTokens};
use syn::{parse_quote, Path};

use crate::misc::ident_prop_match;

use super::parsed::{Accessor, Parsed, Property};

/// Implementation of `Properties` generated by the derive macro
pub(crate) struct Derived {
    parsed: Parsed,
    ident_prop_match: Ident,
}

impl Derived {
    pub(crate) fn new(parsed: Parsed) -> Self {
        Self {
            parsed,
            ident_prop_match: ident_prop_match(),
        }
    }
}

impl ToTokens for Derived {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            parsed:
                Parsed {
                    ident,
                    generics,
                    properties,
                },
            ident_prop_match: pm,
        } = self;

        let mut generics = generics.clone();
        if !generics.params.is_empty() {
            let where_clause = generics.make_where_clause();

            for property in properties {
                if let Accessor::Field { ty, .. } = &property.accessor {
                    where_clause
                        .predicates
                        .push(parse_quote!(#ty: #pm::ToValue));
                }
            }
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let names = properties.iter().map(|p| &p.name);
        let arms = properties.iter().map(|p| read_arm(p, pm));

        tokens.extend(quote! {
            #[automatically_derived]
            impl #impl_generics #pm::Properties for #ident #ty_generics #where_clause {
                fn property_names(&self) -> ::std::vec::Vec<&str> {
                    ::std::vec![#pm::TYPE_PROPERTY #( , #names )*]
                }

                fn property(&self, name: &str) -> ::std::result::Result<#pm::Value, #pm::Error> {
                    match name {
                        #pm::TYPE_PROPERTY => ::std::result::Result::Ok(#pm::Value::new(
                            ::std::string::String::from(::std::any::type_name::<Self>()),
                        )),
                        #( #arms )*
                        _ => ::std::result::Result::Err(#pm::Error::unknown_property::<Self>(name)),
                    }
                }
            }
        });
    }
}

fn read_arm(property: &Property, pm: &Ident) -> TokenStream {
    let name = &property.name;

    let read = match &property.accessor {
        Accessor::Field { member, .. } => quote! {
            ::std::result::Result::Ok(#pm::ToValue::to_value(&self.#member))
        },
        Accessor::Getter(path) => {
            let call = call_getter(path);

            quote! {
                ::std::result::Result::Ok(#pm::ToValue::to_value(&#call))
            }
        }
        Accessor::TryGetter(path) => {
            let call = call_getter(path);

            quote! {
                match #call {
                    ::std::result::Result::Ok(value) => ::std::result::Result::Ok(#pm::ToValue::to_value(&value)),
                    ::std::result::Result::Err(err) => ::std::result::Result::Err(#pm::Error::accessor(#name, err)),
                }
            }
        }
    };

    quote!(#name => #read,)
}

fn call_getter(path: &Path) -> TokenStream {
    match path.get_ident() {
        Some(method) => quote!(self.#method()),
        None => quote!(#path(self)),
    }
}
