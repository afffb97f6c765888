//! Commented TOML template, one block per field.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;
use crate::config::types::{default_literal, is_option};

/// Statements appending every field to `out`. Expects `default: Self` in scope.
pub fn template_body(fields: &[&FieldInfo]) -> TokenStream {
    let blocks = fields.iter().map(|f| field_block(f));
    quote! { #(#blocks)* }
}

fn field_block(info: &FieldInfo) -> TokenStream {
    let doc = info
        .doc
        .as_deref()
        .map(|doc| doc.lines().map(|l| format!("# {}\n", l.trim())).collect::<String>())
        .unwrap_or_default();
    let trailer = info
        .attrs
        .inline_doc
        .as_deref()
        .map(|c| format!("  # {c}"))
        .unwrap_or_default();
    let key = &info.toml_name;
    let ty = &info.ty;

    if info.attrs.sub {
        return quote! {
            out.push('\n');
            out.push_str(#doc);
            out.push_str(&<#ty>::template_with_header());
        };
    }

    let line = match (&info.attrs.default, is_option(ty)) {
        (Some(value), _) => format!("{doc}{key} = {}{trailer}\n", default_literal(value, ty)),
        // unset optional: show the key, commented out
        (None, true) => format!("{doc}# {key} = ''{trailer}\n"),
        (None, false) => {
            let field = &info.name;
            return quote! {
                out.push_str(#doc);
                out.push_str(#key);
                out.push_str(" = ");
                out.push_str(&toml::Value::try_from(&default.#field)
                    .map(|v| v.to_string())
                    .unwrap_or_default());
                out.push_str(#trailer);
                out.push('\n');
            };
        }
    };
    quote! { out.push_str(#line); }
}
