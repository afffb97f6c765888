//! `#[derive(Config)]` expansion.

mod attr;
mod field;
mod template;
mod types;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields};

use attr::{ConfigAttrs, doc_comment};
use field::FieldInfo;
use template::template_body;
use types::infer_section;

/// Expand the derive, turning parse failures into `compile_error!`.
pub fn derive(input: &DeriveInput) -> TokenStream {
    expand(input).unwrap_or_else(syn::Error::into_compile_error)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let section = ConfigAttrs::parse(&input.attrs)?
        .section
        .unwrap_or_else(|| infer_section(&name.to_string()));
    let section_doc = doc_comment(&input.attrs).unwrap_or_default();

    let fields = named_fields(input)?
        .iter()
        .map(FieldInfo::from_field)
        .collect::<syn::Result<Vec<_>>>()?;

    let paths_struct = format_ident!("{}Fields", name);
    let path_fields: Vec<_> = fields.iter().filter(|f| f.has_path()).collect();
    let path_decls = path_fields.iter().map(|f| {
        let ident = &f.name;
        quote! { pub #ident: crate::config::FieldPath, }
    });
    let path_inits = path_fields.iter().map(|f| {
        let ident = &f.name;
        let path = if section.is_empty() {
            f.toml_name.clone()
        } else {
            format!("{section}.{}", f.toml_name)
        };
        quote! { #ident: crate::config::FieldPath::new(#path), }
    });

    let template_fields: Vec<_> = fields.iter().filter(|f| f.in_template()).collect();
    let body = template_body(&template_fields);

    Ok(quote! {
        /// Field paths of the derived config struct.
        #[allow(dead_code)]
        pub struct #paths_struct {
            #(#path_decls)*
        }

        #[allow(dead_code)]
        impl #name {
            /// Full TOML path of every field, for diagnostics.
            pub const FIELDS: #paths_struct = #paths_struct {
                #(#path_inits)*
            };

            /// TOML table this struct lives in; empty for the document root.
            pub const TEMPLATE_SECTION: &'static str = #section;

            /// Struct doc comment, printed above the table header.
            pub const TEMPLATE_DOC: &'static str = #section_doc;

            /// Commented TOML for every field, without a table header.
            #[allow(unused_variables)]
            pub fn template() -> String {
                let default = Self::default();
                let mut out = String::new();
                #body
                out
            }

            /// [`Self::template`] preceded by the struct doc and `[section]`.
            pub fn template_with_header() -> String {
                let mut out: String = Self::TEMPLATE_DOC
                    .lines()
                    .map(|line| format!("# {}\n", line.trim()))
                    .collect();
                if !Self::TEMPLATE_SECTION.is_empty() {
                    out.push_str(&format!("[{}]\n", Self::TEMPLATE_SECTION));
                }
                out.push_str(&Self::template());
                out
            }
        }
    })
}

type NamedFields = syn::punctuated::Punctuated<syn::Field, syn::Token![,]>;

fn named_fields(input: &DeriveInput) -> syn::Result<&NamedFields> {
    let message = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => return Ok(&fields.named),
            _ => "Config only works on structs with named fields",
        },
        _ => "Config only works on structs",
    };
    Err(syn::Error::new_spanned(&input.ident, message))
}
