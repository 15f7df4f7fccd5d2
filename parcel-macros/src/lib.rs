//! 包裹领域的过程宏（parcel-macros）
//!
//! - `#[value_object]`：为值对象补齐派生；
//! - `#[entity_id]`：为整型标识的 tuple struct 生成派生与转换实现。
//!
use proc_macro::TokenStream;

mod derive_utils;
mod entity_id;
mod value_object;

/// 值对象宏
///
/// 支持结构体（具名或 tuple）与枚举，合并派生：
/// `Debug`（可通过 `debug = false` 关闭）、`Clone`、`PartialEq`、`Eq`、
/// `serde::Serialize`、`serde::Deserialize`；`default = true` 时追加 `Default`。
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}

/// 实体标识宏
///
/// 仅支持单字段 tuple struct（例如 `struct ParcelNumber(i64);`），生成：
/// - 派生：`Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash` 与透明的 serde 实现
/// - `new`/`value`、`Display`、`FromStr` 以及与内部类型的双向 `From`
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}
