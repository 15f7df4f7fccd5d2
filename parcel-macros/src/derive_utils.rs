use quote::ToTokens;
use syn::{Attribute, Token, punctuated::Punctuated};

// 拆分出 derive 列表与其余属性
fn split_derives(attrs: &[Attribute]) -> (Vec<Attribute>, Vec<syn::Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("derive") {
            retained.push(attr.clone());
            continue;
        }
        if let Ok(list) =
            attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
        {
            existing.extend(list);
        }
    }
    (retained, existing)
}

// 以最后一段标识去重，`Serialize` 与 `serde::Serialize` 视为同一个
fn derive_key(p: &syn::Path) -> String {
    match p.segments.last() {
        Some(last) => last.ident.to_string(),
        None => p.to_token_stream().to_string(),
    }
}

/// 将 required 与已有 derive 合并为一个 `#[derive(..)]`，放在属性列表最前
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<syn::Path>) {
    let (retained, existing) = split_derives(attrs);

    let mut seen = std::collections::HashSet::new();
    let merged: Vec<syn::Path> = required
        .into_iter()
        .chain(existing)
        .filter(|p| seen.insert(derive_key(p)))
        .collect();

    let derive: Attribute = syn::parse_quote!(#[derive(#(#merged),*)]);
    *attrs = std::iter::once(derive).chain(retained).collect();
}

/// 解析 `key = true|false` 形式的布尔参数列表
pub(crate) fn parse_bool_flags(
    input: syn::parse::ParseStream<'_>,
    allowed: &[&str],
) -> syn::Result<Vec<(syn::Ident, bool)>> {
    let mut flags: Vec<(syn::Ident, bool)> = Vec::new();
    while !input.is_empty() {
        let key: syn::Ident = input.parse()?;
        if !allowed.iter().any(|a| key == a) {
            return Err(syn::Error::new(
                key.span(),
                format!(
                    "unknown key in attribute; expected one of: {}",
                    allowed.join(", ")
                ),
            ));
        }
        if flags.iter().any(|(k, _)| *k == key) {
            return Err(syn::Error::new(
                key.span(),
                format!("duplicate key '{key}' in attribute"),
            ));
        }
        let _eq: Token![=] = input.parse()?;
        let lit: syn::LitBool = input.parse()?;
        flags.push((key, lit.value()));

        if input.is_empty() {
            break;
        }
        let _comma: Token![,] = input.parse()?;
    }
    Ok(flags)
}
