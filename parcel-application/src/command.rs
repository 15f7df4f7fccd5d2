/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，会修改包裹状态。
/// - 建议保持语义化的“动宾结构”命名，如 `RegisterParcel`、`ChangeAddress`；
/// - `Output` 为执行结果，多数命令为 `()`，新增类命令返回生成的标识。
///
/// 关联常量：
/// - `NAME`：命令的稳定名称，用于日志与追踪。避免依赖 `type_name::<T>()`。
pub trait Command: Send + Sync + 'static {
    /// 命令的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 命令执行成功后的返回值
    type Output: Send;
}
