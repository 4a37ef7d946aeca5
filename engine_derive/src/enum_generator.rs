//! Generate FixedEnum and Property implementations for unit enums

use crate::attributes::parse_type_attributes;
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Fields};

pub fn generate_enum_impl(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "InspectEnum can only be derived for enums",
        ));
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "InspectEnum requires at least one variant",
        ));
    }
    if let Some(variant) = data
        .variants
        .iter()
        .find(|v| !matches!(v.fields, Fields::Unit))
    {
        return Err(syn::Error::new_spanned(
            variant,
            "InspectEnum variants cannot carry data",
        ));
    }

    let type_attrs = parse_type_attributes(&input.attrs)?;
    let type_name = type_attrs.name.unwrap_or_else(|| name.to_string());

    let variants: Vec<_> = data.variants.iter().map(|v| &v.ident).collect();
    let members = variants.iter().map(|v| v.to_string());
    let indices: Vec<_> = (0..variants.len()).map(Literal::usize_unsuffixed).collect();

    Ok(quote! {
        impl ::engine::reflect::FixedEnum for #name {
            const TYPE_NAME: &'static str = #type_name;
            const MEMBERS: &'static [&'static str] = &[#(#members),*];

            fn index(&self) -> usize {
                match self {
                    #(Self::#variants => #indices,)*
                }
            }

            fn from_index(index: usize) -> Option<Self> {
                match index {
                    #(#indices => Some(Self::#variants),)*
                    _ => None,
                }
            }
        }

        impl ::engine::reflect::Property for #name {
            const TAG: ::engine::reflect::TypeTag = ::engine::reflect::TypeTag::EnumFixed;

            fn to_value(&self) -> ::engine::reflect::Value {
                ::engine::reflect::enums::fixed_enum_value(self)
            }

            fn assign(
                &mut self,
                value: ::engine::reflect::Value,
            ) -> ::std::result::Result<(), ::engine::reflect::CoercionError> {
                *self = ::engine::reflect::enums::fixed_enum_from_value::<Self>(&value)?;
                Ok(())
            }
        }
    })
}
