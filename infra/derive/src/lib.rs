#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Roster workspace.
//! They remove the boilerplate around error enums, API data models, `OpenAPI`-annotated
//! handlers, feature slices and the Tokio bootstrap in `main`.
//!
//! Examples below are `ignore`d because a proc-macro crate cannot use its own macros;
//! the consuming crates exercise them in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap a pre-configured Tokio runtime.
///
/// Turns an `async fn main() -> Result<..>` into a plain `fn main` that builds the
/// runtime from a [`RuntimeConfig`] preset and blocks on the original body.
///
/// # Arguments
///
/// * `high_performance` - Server profile (larger stacks, long keep-alive).
/// * `memory_efficient` - Half the worker threads, smaller stacks.
/// * `default` - Worker threads auto-detected from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[roster_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
///
/// [`RuntimeConfig`]: https://docs.rs/roster-runtime
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Defines an API data model (DTO).
///
/// * **Derives**: adds `Debug`, `Serialize` and `Deserialize` when missing.
/// * **`OpenAPI`**: adds `utoipa::ToSchema` when the consuming crate enables `server`.
/// * **Serde policy**: `rename_all = "camelCase"` and `deny_unknown_fields` unless overridden.
///
/// # Example
///
/// ```rust,ignore
/// use roster_derive::api_model;
///
/// #[api_model(deny_unknown_fields = false)]
/// pub struct UserPayload {
///     pub name: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Bridges an Axum handler with its `OpenAPI` operation.
///
/// The arguments are forwarded verbatim to `utoipa::path` (only when the consuming
/// crate enables `server`), so `get`, `path = "..."`, `params(...)`, `responses(...)`
/// and `tag = ...` all work as usual.
///
/// # Example
///
/// ```rust,ignore
/// #[api_handler(
///     get,
///     path = "/users",
///     responses((status = OK, body = [User])),
///     tag = USERS_TAG,
/// )]
/// pub async fn list_users(State(state): State<ApiState>) -> impl IntoResponse { ... }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Turns an enum into a crate error type.
///
/// * Adds `#[derive(Debug, thiserror::Error)]` when missing.
/// * Generates `<Name>Ext` with `.context(...)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant carrying a `source` field.
/// * Implements `From<Source>` for those variants so `?` works upstream.
/// * Implements `From<&'static str>` / `From<String>` when an `Internal` variant exists.
/// * Emits a module-local `format_context` helper for the `#[error(...)]` strings.
///
/// Variants must use named fields; variants with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// #[roster_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn roster_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).unwrap_or_else(syn::Error::into_compile_error).into()
}

/// Turns a struct into a feature slice handle.
///
/// The fields move into a generated `<Name>Inner`; `<Name>` becomes a cheap `Arc`
/// wrapper that derefs to it and implements `FeatureSlice` for registration in `ApiState`.
///
/// # Example
/// ```rust,ignore
/// #[roster_derive::roster_slice]
/// pub struct Users {
///     pub registry: UserRegistry,
/// }
///
/// let slice = Users::new(UsersInner { registry: UserRegistry::new() });
/// ```
#[proc_macro_attribute]
pub fn roster_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
