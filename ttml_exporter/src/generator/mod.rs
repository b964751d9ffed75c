//! # Timed Text Markup Language 歌词格式导出器
//!
//! 将内部的歌词行数组导出为 TTML 文本。流程分为三步：
//! 段落分组、构建文档树、序列化。
//!
//! 注意：该模块只输出 AMLL 歌词库使用的结构，不做任何 TTML 模式校验。

mod body;
mod grouping;
mod head;
mod serializer;
mod track;
mod tree;
mod utils;

use ttml_db_core::{ConvertError, LyricLine, TtmlExportOptions};

use tree::XmlElement;

const TTML_NAMESPACE: &str = "http://www.w3.org/ns/ttml";
const TTML_METADATA_NAMESPACE: &str = "http://www.w3.org/ns/ttml#metadata";
const ITUNES_NAMESPACE: &str = "http://music.apple.com/lyric-ttml-internal";

/// TTML 导出的主入口函数。
///
/// # 参数
/// * `lines` - 歌词行，按文档顺序排列，不会被重新排序。
/// * `options` - 导出选项，控制格式化输出和翻译语言。
///
/// # Errors
///
/// 写入 XML 或将结果转换为字符串失败时返回 `ConvertError`。
pub fn export_ttml(
    lines: &[LyricLine],
    options: &TtmlExportOptions,
) -> Result<String, ConvertError> {
    let paragraphs = grouping::group_paragraphs(lines);
    let with_alternate_agent = head::needs_alternate_agent(lines);

    let document = XmlElement::new("tt")
        .with_attribute("xmlns", TTML_NAMESPACE)
        .with_attribute("xmlns:ttm", TTML_METADATA_NAMESPACE)
        .with_attribute("xmlns:itunes", ITUNES_NAMESPACE)
        .with_child(head::build_head(with_alternate_agent))
        .with_child(body::build_body(&paragraphs, lines, options));

    let indent = options.pretty.then_some(options.indent_size);
    let output = serializer::serialize_document(&document, indent)?;

    tracing::debug!(
        lines = lines.len(),
        paragraphs = paragraphs.len(),
        with_alternate_agent,
        pretty = options.pretty,
        bytes = output.len(),
        "TTML 导出完成"
    );
    Ok(output)
}

/// 使用默认选项导出，只指定是否格式化输出。
///
/// # Errors
///
/// 同 [`export_ttml`]。
pub fn export_ttml_text(lines: &[LyricLine], pretty: bool) -> Result<String, ConvertError> {
    let options = TtmlExportOptions {
        pretty,
        ..Default::default()
    };
    export_ttml(lines, &options)
}
