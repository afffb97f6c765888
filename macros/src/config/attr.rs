//! `#[config(...)]` and doc comment parsing.

use syn::{Attribute, Expr, ExprLit, Lit, LitStr, Meta, meta::ParseNestedMeta};

/// Options collected from every `#[config(...)]` on a struct or field.
#[derive(Default)]
pub struct ConfigAttrs {
    pub section: Option<String>,
    pub name: Option<String>,
    pub default: Option<String>,
    pub inline_doc: Option<String>,
    pub skip: bool,
    pub hidden: bool,
    pub sub: bool,
}

impl ConfigAttrs {
    /// Parse all `config` attributes. Unknown keys are compile errors.
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("config")) {
            attr.parse_nested_meta(|meta| {
                let Some(key) = meta.path.get_ident().map(ToString::to_string) else {
                    return Err(meta.error("expected a config key"));
                };
                match key.as_str() {
                    "skip" => out.skip = true,
                    "hidden" => out.hidden = true,
                    "sub" => out.sub = true,
                    "section" => out.section = Some(string_value(&meta)?),
                    "name" => out.name = Some(string_value(&meta)?),
                    "default" => out.default = Some(string_value(&meta)?),
                    "inline_doc" => out.inline_doc = Some(string_value(&meta)?),
                    _ => return Err(meta.error(format!("unknown config key `{key}`"))),
                }
                Ok(())
            })?;
        }
        Ok(out)
    }
}

fn string_value(meta: &ParseNestedMeta) -> syn::Result<String> {
    Ok(meta.value()?.parse::<LitStr>()?.value())
}

/// Joined `///` lines, trimmed. `None` when there are none.
pub fn doc_comment(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .collect();

    let doc = lines.join("\n");
    let doc = doc.trim();
    (!doc.is_empty()).then(|| doc.to_string())
}
