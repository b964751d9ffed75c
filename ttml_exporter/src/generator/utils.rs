//! # TTML 生成器 - 工具函数模块
//!
//! 该模块提供了 TTML 生成过程中所需的各种辅助函数。

use ttml_db_core::INFINITE_TIME_MS;

/// 将毫秒时间戳格式化为 TTML 时间字符串。
/// 例如：61234ms -> "01:01.234"，3661000ms -> "01:01:01.000"
///
/// 小时为 0 时省略小时字段。超过 99 小时后小时字段按实际位数加宽，不截断。
pub(super) fn format_ttml_time(ms: u64) -> String {
    if ms == INFINITE_TIME_MS {
        return "99:99.999".to_string();
    }

    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let millis = ms % 1000;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
    } else {
        format!("{minutes:02}:{seconds:02}.{millis:03}")
    }
}
