//! Proc macros for sitecfg.
//!
//! `#[derive(Config)]` turns a serde config struct into two things:
//!
//! - `Type::FIELDS`, one `FieldPath` per field holding its full TOML path,
//!   so diagnostics cannot misspell a key;
//! - `Type::template()` / `Type::template_with_header()`, a commented TOML
//!   file built from the doc comments and defaults.
//!
//! ```ignore
//! /// Feed generation.
//! #[derive(Default, Serialize, Deserialize, Config)]
//! #[config(section = "feed")]
//! pub struct FeedConfig {
//!     /// Atom feed with every article.
//!     pub all_atom: Option<String>,
//! }
//!
//! assert_eq!(FeedConfig::FIELDS.all_atom.as_str(), "feed.all_atom");
//! // "# Feed generation.\n[feed]\n# Atom feed with every article.\n# all_atom = ''\n"
//! let toml = FeedConfig::template_with_header();
//! ```
//!
//! Keys accepted in `#[config(...)]`:
//!
//! | Key              | On     | Effect                                          |
//! |------------------|--------|-------------------------------------------------|
//! | `section = ".."` | struct | TOML table; `""` is the document root           |
//! | `skip`           | field  | left out of `FIELDS` and the template           |
//! | `hidden`         | field  | in `FIELDS`, left out of the template           |
//! | `sub`            | field  | nested config, rendered with its own header     |
//! | `name = ".."`    | field  | TOML key when it differs from the field name    |
//! | `default = ".."` | field  | value shown in the template                     |
//! | `inline_doc = ".."` | field | trailing `# comment` on the template line     |
//!
//! Without `section`, the table name comes from the struct name minus a
//! `Config`/`Settings` suffix, in snake case.

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
