use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::ConvertError;

/// TTML 导出选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct TtmlExportOptions {
    /// 是否输出格式化的 TTML 文件。
    pub pretty: bool,
    /// 格式化输出时每层缩进的空格数。
    pub indent_size: usize,
    /// 内联翻译 `<span>` 上 `xml:lang` 的值。
    pub translation_language: String,
}

impl Default for TtmlExportOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent_size: 2,
            translation_language: "zh-CN".to_string(),
        }
    }
}

impl TtmlExportOptions {
    /// 从 TOML 文本中读取导出选项，缺失的键使用默认值。
    ///
    /// # Errors
    ///
    /// TOML 语法错误或字段类型不符时返回 `ConvertError::InvalidConfig`。
    pub fn from_toml_str(content: &str) -> Result<Self, ConvertError> {
        let options: Self = toml::from_str(content)?;
        tracing::debug!(?options, "已加载导出配置");
        Ok(options)
    }
}
