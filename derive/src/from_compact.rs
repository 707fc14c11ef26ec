use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Field, Fields, GenericArgument, Ident, LitInt, PathArguments,
    Result, Token, Type,
    parse::{Parse, ParseStream},
};

pub(crate) fn expand_from_compact(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`FromCompact` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`FromCompact` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .collect::<Result<Vec<_>>>()?;

    let initializers = fields.iter().map(|field| {
        let FieldMetadata { name, position } = field;

        let value = match position {
            Some(Position::Single { index, inner }) => quote! {
                values
                    .get(#index)
                    .and_then(|value| {
                        <#inner as ::loupe::avec::FromCompactValue>::from_compact_value(value, options)
                    })
            },
            Some(Position::Rest { start, inner }) => quote! {
                values
                    .get(#start..)
                    .unwrap_or_default()
                    .iter()
                    .filter_map(|value| {
                        <#inner as ::loupe::avec::FromCompactValue>::from_compact_value(value, options)
                    })
                    .collect()
            },
            None => quote! { ::core::default::Default::default() },
        };

        quote! { #name: #value }
    });

    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::loupe::avec::FromCompact for #name #type_generics #where_clause {
            #[allow(unused_variables)]
            fn from_compact(
                values: &[::loupe::avec::CompactValue],
                options: &::loupe::Options,
            ) -> Self {
                Self {
                    #(#initializers,)*
                }
            }
        }

        impl #impl_generics ::loupe::avec::FromCompactValue for #name #type_generics #where_clause {
            fn from_compact_value(
                value: &::loupe::avec::CompactValue,
                options: &::loupe::Options,
            ) -> Option<Self> {
                value
                    .as_list()
                    .map(|values| <Self as ::loupe::avec::FromCompact>::from_compact(values, options))
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    position: Option<Position>,
}

#[derive(Debug)]
enum Position {
    /// `position(N)` on an `Option<T>`.
    Single { index: LitInt, inner: Type },
    /// `position(N..)` on a `Vec<T>`.
    Rest { start: LitInt, inner: Type },
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Self> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("position")) else {
            return Ok(Self {
                name,
                position: None,
            });
        };

        let PositionAttribute { index, is_rest } = attr.meta.require_list()?.parse_args()?;

        let expected = if is_rest { "Vec" } else { "Option" };
        let inner = generic_parameter(&field.ty, expected)?;

        let position = if is_rest {
            Position::Rest {
                start: index,
                inner,
            }
        } else {
            Position::Single { index, inner }
        };

        Ok(Self {
            name,
            position: Some(position),
        })
    }
}

/// Extract `T` from a field typed `Option<T>` or `Vec<T>`.
fn generic_parameter(ty: &Type, expected: &str) -> Result<Type> {
    let message = if expected == "Vec" {
        "Field with a `position(N..)` attribute must have type `Vec<T>`."
    } else {
        "Field with a `position(N)` attribute must have type `Option<T>`."
    };

    let Type::Path(path) = ty else {
        Err(Error::new_spanned(ty, message))?
    };

    let Some(segment) = path.path.segments.last() else {
        Err(Error::new_spanned(&path.path.segments, message))?
    };

    if segment.ident != expected {
        Err(Error::new_spanned(&segment.ident, message))?
    }

    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        Err(Error::new_spanned(&segment.arguments, message))?
    };

    let Some(GenericArgument::Type(inner_type)) = arguments.args.first() else {
        Err(Error::new_spanned(&arguments.args, message))?
    };

    Ok(inner_type.clone())
}

#[derive(Debug)]
struct PositionAttribute {
    index: LitInt,
    is_rest: bool,
}

impl Parse for PositionAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let index = input.parse::<LitInt>()?;

        let is_rest = if !input.is_empty() {
            input.parse::<Token![..]>()?;
            true
        } else {
            false
        };

        Ok(Self { index, is_rest })
    }
}
