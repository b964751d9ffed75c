//! # 歌词数据模型
//!
//! 与上游 TTML 解析器输出的结构保持一致（字段名为 camelCase），
//! 因此解析器导出的 JSON 可以直接反序列化为这里的类型。

use serde::{Deserialize, Serialize};

use crate::ConvertError;

/// 表示“无限”时间的哨兵值，格式化为 `99:99.999`。
pub const INFINITE_TIME_MS: u64 = u64::MAX;

/// 一个带有逐字时间的单词（或音节）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LyricWord {
    /// 开始时间（毫秒）
    pub time: u64,
    /// 持续时间（毫秒）
    pub duration: u64,
    /// 单词文本，输出时会去除首尾空白
    pub word: String,
}

impl LyricWord {
    #[must_use]
    pub const fn end_time(&self) -> u64 {
        self.time.saturating_add(self.duration)
    }
}

/// 一行歌词。
///
/// 背景人声行复用同样的结构，挂在父行的 `background_lyric` 上。
/// 背景行自身的 `background_lyric` 不会被导出。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LyricLine {
    /// 开始时间（毫秒）
    pub begin_time: u64,
    /// 持续时间（毫秒）
    pub duration: u64,
    /// 原文歌词
    pub original_lyric: String,
    /// 是否为独立出现的背景人声行，这种行不会进入任何段落
    pub is_background_lyric: bool,
    /// 是否右对齐，即是否由第二位演唱者演唱
    pub should_align_right: bool,
    /// 翻译
    pub translated_lyric: Option<String>,
    /// 罗马音
    pub roman_lyric: Option<String>,
    /// 逐字歌词
    pub dynamic_lyric: Option<Vec<LyricWord>>,
    /// 逐字歌词的起始时间。只有它存在时才会按逐字输出
    pub dynamic_lyric_time: Option<u64>,
    /// 附属的背景人声行
    pub background_lyric: Option<Box<LyricLine>>,
}

impl LyricLine {
    /// 创建一个只有原文和时间的行。
    #[must_use]
    pub fn new(begin_time: u64, duration: u64, original_lyric: impl Into<String>) -> Self {
        Self {
            begin_time,
            duration,
            original_lyric: original_lyric.into(),
            ..Default::default()
        }
    }

    /// 结束时间。与无限时间相加时保持为无限。
    #[must_use]
    pub const fn end_time(&self) -> u64 {
        self.begin_time.saturating_add(self.duration)
    }

    /// 逐字数据，仅当单词序列与其时间标记同时存在时返回。
    #[must_use]
    pub fn word_timing(&self) -> Option<&[LyricWord]> {
        self.dynamic_lyric_time.and(self.dynamic_lyric.as_deref())
    }

    #[must_use]
    pub fn has_word_timing(&self) -> bool {
        self.word_timing().is_some()
    }

    /// 去除空白后的翻译文本，空文本视为不存在。
    #[must_use]
    pub fn translation(&self) -> Option<&str> {
        non_blank(self.translated_lyric.as_deref())
    }

    /// 去除空白后的罗马音文本，空文本视为不存在。
    #[must_use]
    pub fn romanization(&self) -> Option<&str> {
        non_blank(self.roman_lyric.as_deref())
    }

    /// 该行或其背景人声是否需要第二位演唱者。
    #[must_use]
    pub fn requests_alternate_agent(&self) -> bool {
        self.should_align_right
            || self
                .background_lyric
                .as_ref()
                .is_some_and(|bg| bg.should_align_right)
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|s| !s.is_empty())
}

/// 从上游解析器输出的 JSON 数组中读取歌词行。
///
/// # Errors
///
/// JSON 结构无效，或时间字段为负数、非整数时返回 `ConvertError::JsonParse`。
pub fn lines_from_json(json: &str) -> Result<Vec<LyricLine>, ConvertError> {
    serde_json::from_str(json).map_err(|e| ConvertError::json_parse(e, "歌词行".to_string()))
}
