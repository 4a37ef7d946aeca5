//! Attribute parsing for the reflection derive macros

use syn::{meta::ParseNestedMeta, Attribute, ExprPath, Field, Ident, LitInt, LitStr, Token};

/// Parsed field attributes from #[inspect(...)]
#[derive(Debug, Default)]
pub struct InspectFieldAttribute {
    pub group: Option<String>,
    pub order: Option<i32>,
    /// Predicate `fn(&Self) -> bool` hiding the field for the current instance
    pub hidden_if: Option<ExprPath>,
    pub transient: bool,
    pub read_only: bool,
    pub skip: bool,
    pub flatten: bool,
    pub revision: bool,
}

/// Parsed struct/enum attributes from #[inspect(...)]
#[derive(Debug, Default)]
pub struct InspectTypeAttribute {
    pub name: Option<String>,
    pub actions: Vec<Ident>,
}

/// Parse inspect attributes from a field
pub fn parse_field_attributes(field: &Field) -> syn::Result<InspectFieldAttribute> {
    let mut attrs = InspectFieldAttribute::default();

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("inspect")) {
        attr.parse_nested_meta(|meta| parse_field_meta(&meta, &mut attrs))?;
    }

    let exclusive = [attrs.skip, attrs.flatten, attrs.revision]
        .iter()
        .filter(|set| **set)
        .count();
    if exclusive > 1 {
        return Err(syn::Error::new_spanned(
            field,
            "`skip`, `flatten` and `revision` cannot be combined",
        ));
    }
    if (attrs.flatten || attrs.revision || attrs.skip)
        && (attrs.group.is_some() || attrs.order.is_some() || attrs.hidden_if.is_some())
    {
        return Err(syn::Error::new_spanned(
            field,
            "layout attributes only apply to reflected fields",
        ));
    }

    Ok(attrs)
}

fn parse_field_meta(meta: &ParseNestedMeta, attrs: &mut InspectFieldAttribute) -> syn::Result<()> {
    let ident = meta
        .path
        .get_ident()
        .ok_or_else(|| syn::Error::new_spanned(&meta.path, "expected identifier"))?
        .to_string();

    match ident.as_str() {
        "group" => {
            let lit: LitStr = meta.value()?.parse()?;
            attrs.group = Some(lit.value());
        }
        "order" => {
            let value = meta.value()?;
            let negative = value.peek(Token![-]);
            if negative {
                value.parse::<Token![-]>()?;
            }
            let lit: LitInt = value.parse()?;
            let order: i32 = lit.base10_parse()?;
            attrs.order = Some(if negative { -order } else { order });
        }
        "hidden_if" => {
            let lit: LitStr = meta.value()?.parse()?;
            attrs.hidden_if = Some(lit.parse()?);
        }
        "transient" => attrs.transient = true,
        "read_only" => attrs.read_only = true,
        "skip" => attrs.skip = true,
        "flatten" => attrs.flatten = true,
        "revision" => attrs.revision = true,
        _ => {
            return Err(syn::Error::new_spanned(
                &meta.path,
                format!("unknown inspect attribute: {ident}"),
            ));
        }
    }

    Ok(())
}

/// Parse inspect attributes from the type itself
pub fn parse_type_attributes(attrs: &[Attribute]) -> syn::Result<InspectTypeAttribute> {
    let mut parsed = InspectTypeAttribute::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("inspect")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                parsed.name = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("actions") {
                meta.parse_nested_meta(|action| {
                    let ident = action.path.get_ident().ok_or_else(|| {
                        syn::Error::new_spanned(&action.path, "expected method name")
                    })?;
                    parsed.actions.push(ident.clone());
                    Ok(())
                })
            } else {
                Err(meta.error("unknown inspect attribute, expected `name` or `actions`"))
            }
        })?;
    }

    Ok(parsed)
}
