//! Generate the Inspectable and Property implementations for structs

use crate::attributes::{parse_field_attributes, parse_type_attributes, InspectFieldAttribute};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Field, Fields, Ident};

pub fn generate_inspectable_impl(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Inspectable cannot be derived for generic types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => &named.named,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Inspectable can only be derived for structs with named fields",
            ))
        }
    };

    let type_attrs = parse_type_attributes(&input.attrs)?;
    let type_name = type_attrs.name.unwrap_or_else(|| name.to_string());

    let mut steps = Vec::new();
    let mut revision: Option<&Ident> = None;
    for field in fields {
        let attrs = parse_field_attributes(field)?;
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        if attrs.revision {
            if revision.is_some() {
                return Err(syn::Error::new_spanned(
                    field,
                    "only one field can be marked `revision`",
                ));
            }
            revision = Some(ident);
        } else if attrs.flatten {
            steps.push(generate_flatten_step(field, ident));
        } else if !attrs.skip {
            steps.push(generate_property_step(field, ident, &attrs, &type_name));
        }
    }

    let actions = type_attrs.actions.iter().map(|action| {
        let action_name = action.to_string();
        quote! {
            .with_action(::engine::reflect::DebugAction::new::<Self>(#action_name, Self::#action))
        }
    });

    let revision_fn = revision.map(|field| {
        quote! {
            fn revision(&self) -> Option<u64> {
                Some(self.#field)
            }
        }
    });

    Ok(quote! {
        impl ::engine::reflect::Inspectable for #name {
            fn type_reflection() -> ::engine::reflect::TypeReflection {
                ::engine::reflect::TypeReflection::new(#type_name)
                    #(#steps)*
                    #(#actions)*
            }

            fn reflection(&self) -> ::engine::reflect::TypeReflection {
                <Self as ::engine::reflect::Inspectable>::type_reflection()
            }

            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            #revision_fn
        }

        impl ::engine::reflect::Property for #name {
            const TAG: ::engine::reflect::TypeTag = ::engine::reflect::TypeTag::NestedInspectable;

            fn to_value(&self) -> ::engine::reflect::Value {
                ::engine::reflect::Value::Nested { type_name: #type_name }
            }

            fn assign(
                &mut self,
                _value: ::engine::reflect::Value,
            ) -> ::std::result::Result<(), ::engine::reflect::CoercionError> {
                Err(::engine::reflect::CoercionError::NotAssignable(#type_name))
            }

            fn as_inspectable_mut(&mut self) -> Option<&mut dyn ::engine::reflect::Inspectable> {
                Some(self)
            }
        }
    })
}

fn generate_flatten_step(field: &Field, ident: &Ident) -> TokenStream {
    let ty = &field.ty;
    quote! {
        .extend_flattened::<Self, #ty>(
            <#ty as ::engine::reflect::Inspectable>::type_reflection(),
            |owner| &owner.#ident,
            |owner| &mut owner.#ident,
        )
    }
}

fn generate_property_step(
    field: &Field,
    ident: &Ident,
    attrs: &InspectFieldAttribute,
    type_name: &str,
) -> TokenStream {
    let ty = &field.ty;
    let field_name = ident.to_string().trim_start_matches("r#").to_string();

    let mut descriptor = quote! {
        ::engine::reflect::PropertyDescriptor::field::<Self, #ty>(
            #field_name,
            #type_name,
            |owner| &owner.#ident,
            |owner| &mut owner.#ident,
        )
    };
    if let Some(group) = &attrs.group {
        descriptor = quote! { #descriptor.with_group(#group) };
    }
    if let Some(order) = attrs.order {
        descriptor = quote! { #descriptor.with_order(#order) };
    }
    if let Some(predicate) = &attrs.hidden_if {
        descriptor = quote! { #descriptor.hidden_when::<Self>(#predicate) };
    }
    if attrs.transient {
        descriptor = quote! { #descriptor.transient() };
    }
    if attrs.read_only {
        descriptor = quote! { #descriptor.read_only() };
    }

    quote! { .with_property(#descriptor) }
}
