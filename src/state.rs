use crate::terabox::TeraboxClient;

/// Shared application state / 应用共享状态
///
/// TeraboxClient 内部持有进程级唯一的cookie会话，所有请求共用。
/// 并发请求会交错执行登录，一个请求的列表操作可能跑在另一个请求
/// 刚写入的登录态上。此处与上游实现保持一致，不做加锁或按请求隔离。
pub struct AppState {
    pub terabox: TeraboxClient,
}
