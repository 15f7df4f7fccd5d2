use crate::derive_utils::{apply_derives, parse_bool_flags};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Item, parse_macro_input};

pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ValueObjectAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    if cfg.debug {
        required.insert(0, syn::parse_quote!(Debug));
    }
    if cfg.default {
        required.push(syn::parse_quote!(Default));
    }

    match &mut input {
        Item::Struct(st) => {
            apply_derives(&mut st.attrs, required);
            TokenStream::from(quote! { #st })
        }
        Item::Enum(en) => {
            apply_derives(&mut en.attrs, required);
            TokenStream::from(quote! { #en })
        }
        other => syn::Error::new(other.span(), "#[value_object] only supports struct or enum")
            .to_compile_error()
            .into(),
    }
}

struct ValueObjectAttrConfig {
    debug: bool,
    default: bool,
}

impl Parse for ValueObjectAttrConfig {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let mut cfg = Self {
            debug: true,
            default: false,
        };
        for (key, value) in parse_bool_flags(input, &["debug", "default"])? {
            if key == "debug" {
                cfg.debug = value;
            } else {
                cfg.default = value;
            }
        }
        Ok(cfg)
    }
}
