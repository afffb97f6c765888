//! Per-field data the derive works from.

use syn::{Field, Type};

use crate::config::attr::{ConfigAttrs, doc_comment};

pub struct FieldInfo {
    pub name: syn::Ident,
    /// Key in the TOML file.
    pub toml_name: String,
    pub doc: Option<String>,
    pub attrs: ConfigAttrs,
    pub ty: Type,
}

impl FieldInfo {
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let Some(name) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "Config needs named fields"));
        };
        let attrs = ConfigAttrs::parse(&field.attrs)?;

        Ok(Self {
            toml_name: attrs.name.clone().unwrap_or_else(|| name.to_string()),
            doc: doc_comment(&field.attrs),
            name,
            attrs,
            ty: field.ty.clone(),
        })
    }

    /// Listed in `FIELDS`.
    pub fn has_path(&self) -> bool {
        !self.attrs.skip
    }

    /// Rendered in the template.
    pub fn in_template(&self) -> bool {
        !self.attrs.skip && !self.attrs.hidden
    }
}
