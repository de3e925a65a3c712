use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::parse::Parser;
use syn::{Attribute, ItemFn, ItemStruct, LitBool, LitStr, Token};

const DEFAULT_RENAME_ALL: &str = "camelCase";

/// Expands `#[api_model]`: serde/`OpenAPI` derives plus the default serde policy.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> syn::Result<TokenStream> {
    let mut args_state = ApiModelArgs::default();
    syn::meta::parser(|meta| args_state.apply(&meta)).parse2(args)?;

    let derives = super::derived_trait_names(&input.attrs);
    let existing = SerdeContainer::scan(&input.attrs)?;

    let derive_attr = derive_attr(&derives);
    let schema_attr = schema_attr(&derives);
    let rename_attr = rename_attr(args_state.rename_all, &existing)?;
    let deny_attr = deny_unknown_attr(args_state.deny_unknown_fields, &existing, &input)?;

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #input
    })
}

/// Expands `#[api_handler]`: forwards the arguments to `utoipa::path`.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

#[derive(Default)]
struct ApiModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

impl ApiModelArgs {
    fn apply(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("rename_all") {
            if self.rename_all.is_some() {
                return Err(meta.error("duplicate `rename_all` argument"));
            }
            self.rename_all = Some(meta.value()?.parse()?);
            return Ok(());
        }

        if meta.path.is_ident("deny_unknown_fields") {
            if self.deny_unknown_fields.is_some() {
                return Err(meta.error("duplicate `deny_unknown_fields` argument"));
            }
            let flag: LitBool = meta.value()?.parse()?;
            self.deny_unknown_fields = Some(flag.value);
            return Ok(());
        }

        Err(meta.error("unsupported argument; expected `rename_all` or `deny_unknown_fields`"))
    }
}

/// Container-level serde settings the user already wrote by hand.
struct SerdeContainer {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

impl SerdeContainer {
    fn scan(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut found = Self { rename_all: None, deny_unknown_fields: false };

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    found.rename_all = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("deny_unknown_fields") {
                    found.deny_unknown_fields = true;
                } else {
                    skip_meta_value(&meta)?;
                }
                Ok(())
            })?;
        }

        Ok(found)
    }
}

/// Consumes `= value` or `(...)` after a serde key we do not care about.
fn skip_meta_value(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        let _: syn::Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        let _: TokenStream = content.parse()?;
    }
    Ok(())
}

fn derive_attr(derives: &FxHashSet<String>) -> TokenStream {
    let missing: Vec<TokenStream> = [
        ("Debug", quote! { Debug }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ]
    .into_iter()
    .filter(|(name, _)| !derives.contains(*name))
    .map(|(_, tokens)| tokens)
    .collect();

    if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } }
}

fn schema_attr(derives: &FxHashSet<String>) -> TokenStream {
    if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    }
}

fn rename_attr(requested: Option<LitStr>, existing: &SerdeContainer) -> syn::Result<TokenStream> {
    let wanted = requested.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME_ALL, Span::call_site()));

    match &existing.rename_all {
        Some(lit) if lit.value() != wanted.value() => Err(syn::Error::new_spanned(
            lit,
            "conflicting serde rename_all; remove it or pass the same value to api_model",
        )),
        Some(_) => Ok(quote! {}),
        None => Ok(quote! { #[serde(rename_all = #wanted)] }),
    }
}

fn deny_unknown_attr(
    requested: Option<bool>,
    existing: &SerdeContainer,
    input: &ItemStruct,
) -> syn::Result<TokenStream> {
    let deny = requested.unwrap_or(true);

    match (existing.deny_unknown_fields, deny) {
        (true, false) => Err(syn::Error::new_spanned(
            &input.ident,
            "deny_unknown_fields is already set via serde; remove it before disabling",
        )),
        (true, true) | (false, false) => Ok(quote! {}),
        (false, true) => Ok(quote! { #[serde(deny_unknown_fields)] }),
    }
}
