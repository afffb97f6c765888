//! Type inspection and naming helpers.

use syn::{PathArguments, Type};

/// Last path segment of a type, e.g. `Option` for `std::option::Option<T>`.
fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(p) if p.qself.is_none() => p.path.segments.last(),
        _ => None,
    }
}

pub fn is_option(ty: &Type) -> bool {
    last_segment(ty).is_some_and(|s| {
        s.ident == "Option" && matches!(s.arguments, PathArguments::AngleBracketed(_))
    })
}

/// Render a `#[config(default = "..")]` value as TOML.
///
/// Text-like types are quoted, numbers, booleans and arrays are written as-is.
pub fn default_literal(value: &str, ty: &Type) -> String {
    let ident = last_segment(ty).map(|s| s.ident.to_string()).unwrap_or_default();
    match ident.as_str() {
        "bool" | "u8" | "u16" | "u32" | "u64" | "usize" | "i8" | "i16" | "i32" | "i64"
        | "isize" | "f32" | "f64" | "Vec" => value.to_string(),
        _ => format!("'{value}'"),
    }
}

/// `FeedConfig` -> `feed`, `MenuLinkSettings` -> `menu_link`.
pub fn infer_section(name: &str) -> String {
    let stem = ["Config", "Settings"]
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name);

    let mut out = String::with_capacity(stem.len() + 4);
    for (i, c) in stem.char_indices() {
        if c.is_uppercase() && i > 0 {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}
