//! # TTML 生成器 - Body 处理模块
//!
//! 该模块负责生成 TTML 文件的 `<body>` 部分，把每个段落写入 `<div>`，
//! 每行写入 `<p>`。

use ttml_db_core::{LyricLine, TtmlExportOptions};

use super::{
    head::Agent,
    track::{append_auxiliary_spans, append_line_text, build_background_span, next_key},
    tree::XmlElement,
    utils::format_ttml_time,
};

/// 构建 `<body>`。
///
/// `dur` 取自完整输入的最后一行（可能是背景行或空行），而不是最后一个段落。
pub(super) fn build_body(
    paragraphs: &[Vec<&LyricLine>],
    lines: &[LyricLine],
    options: &TtmlExportOptions,
) -> XmlElement {
    let guessed_duration = lines.last().map_or(0, LyricLine::end_time);
    let mut body =
        XmlElement::new("body").with_attribute("dur", format_ttml_time(guessed_duration));

    for paragraph in paragraphs {
        body.push_child(build_div(paragraph, options));
    }
    body
}

fn build_div(paragraph: &[&LyricLine], options: &TtmlExportOptions) -> XmlElement {
    let div_start_ms = paragraph.first().map_or(0, |l| l.begin_time);
    let div_end_ms = paragraph.last().map_or(0, |l| l.end_time());

    let mut div = XmlElement::new("div")
        .with_attribute("begin", format_ttml_time(div_start_ms))
        .with_attribute("end", format_ttml_time(div_end_ms));

    // 每个段落的 itunes:key 从 L1 重新开始
    let mut key_counter = 0;
    for line in paragraph {
        div.push_child(build_p(line, &mut key_counter, options));
    }
    div
}

fn build_p(line: &LyricLine, key_counter: &mut u32, options: &TtmlExportOptions) -> XmlElement {
    let mut p = XmlElement::new("p")
        .with_attribute("begin", format_ttml_time(line.begin_time))
        .with_attribute("end", format_ttml_time(line.end_time()))
        .with_attribute("ttm:agent", Agent::for_alignment(line.should_align_right).id())
        .with_attribute("itunes:key", next_key(key_counter));

    append_line_text(&mut p, line);

    if let Some(background) = &line.background_lyric {
        p.push_child(build_background_span(background, key_counter, options));
    }

    append_auxiliary_spans(&mut p, line, options);
    p
}
