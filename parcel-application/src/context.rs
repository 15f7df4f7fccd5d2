use bon::Builder;

/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用（命令/查询）所需的横切信息，记录到处理器的 tracing span 上：
/// - `correlation_id`：关联追踪标识；
/// - `actor_id`：发起操作的主体。
///
/// 典型用法：
/// ```rust
/// use parcel_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .correlation_id("cor-123".to_string())
///     .actor_id("operator-1".to_string())
///     .build();
/// assert_eq!(ctx.correlation_id.as_deref(), Some("cor-123"));
/// ```
#[derive(Clone, Debug, Default, Builder)]
pub struct AppContext {
    pub correlation_id: Option<String>,
    pub actor_id: Option<String>,
}
