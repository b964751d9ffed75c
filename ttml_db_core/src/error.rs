use std::io;

use thiserror::Error;

/// 定义歌词导出过程中可能发生的各种错误。
#[derive(Error, Debug)]
pub enum ConvertError {
    /// 写入 XML 时发生的 IO 错误。
    #[error("IO 错误: {0}")]
    Io(#[from] io::Error),
    /// 从字节序列转换为 UTF-8 字符串失败。
    #[error("UTF-8 转换错误: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
    /// JSON 解析错误。负数或非数字的时间值也会在这里被拒绝。
    #[error("解析 JSON 内容 {context} 失败: {source}")]
    JsonParse {
        /// 底层 `serde_json` 错误
        #[source]
        source: serde_json::Error,
        /// 有关错误发生位置的上下文信息。
        context: String,
    },
    /// 导出选项的 TOML 内容无效。
    #[error("无效的导出配置: {0}")]
    InvalidConfig(#[from] toml::de::Error),
}

impl From<ConvertError> for std::io::Error {
    fn from(err: ConvertError) -> Self {
        Self::other(err)
    }
}

impl ConvertError {
    /// 创建一个带有上下文的 `JsonParse` 错误。
    #[must_use]
    pub fn json_parse(source: serde_json::Error, context: String) -> Self {
        Self::JsonParse { source, context }
    }
}
