//! # TTML 生成器 - 行内容模块
//!
//! 该模块负责 `<p>` 内部的内容：逐字 `<span>` 或整行文本、背景人声 `<span>`，
//! 以及内联的翻译和罗马音。

use ttml_db_core::{LyricLine, LyricWord, TtmlExportOptions};

use super::{head::Agent, tree::XmlElement, utils::format_ttml_time};

/// 写入行的主体文本。有逐字数据时每个单词一个带时间的 `<span>`，否则写入整行文本。
pub(super) fn append_line_text(element: &mut XmlElement, line: &LyricLine) {
    if let Some(words) = line.word_timing() {
        for word in words {
            element.push_child(word_span(word));
        }
    } else {
        element.push_text(line.original_lyric.trim());
    }
}

fn word_span(word: &LyricWord) -> XmlElement {
    let mut span = XmlElement::new("span")
        .with_attribute("begin", format_ttml_time(word.time))
        .with_attribute("end", format_ttml_time(word.end_time()));
    span.push_text(word.word.trim());
    span
}

/// 追加内联的翻译与罗马音 `<span>`，空内容不会生成元素。
pub(super) fn append_auxiliary_spans(
    element: &mut XmlElement,
    line: &LyricLine,
    options: &TtmlExportOptions,
) {
    if let Some(translation) = line.translation() {
        let mut span = XmlElement::new("span")
            .with_attribute("ttm:role", "x-translation")
            .with_attribute("xml:lang", options.translation_language.as_str());
        span.push_text(translation);
        element.push_child(span);
    }

    if let Some(romanization) = line.romanization() {
        let mut span = XmlElement::new("span").with_attribute("ttm:role", "x-roman");
        span.push_text(romanization);
        element.push_child(span);
    }
}

/// 构建背景人声 `<span>`。
///
/// 演唱者由背景行自己的对齐方式决定，不继承父行；`itunes:key` 继续使用段落计数器。
pub(super) fn build_background_span(
    background: &LyricLine,
    key_counter: &mut u32,
    options: &TtmlExportOptions,
) -> XmlElement {
    let mut span = XmlElement::new("span")
        .with_attribute(
            "ttm:agent",
            Agent::for_alignment(background.should_align_right).id(),
        )
        .with_attribute("itunes:key", next_key(key_counter));

    append_line_text(&mut span, background);
    append_auxiliary_spans(&mut span, background, options);
    span
}

/// 递增段落内的计数器并返回新的 `L<n>` 键。
pub(super) fn next_key(key_counter: &mut u32) -> String {
    *key_counter += 1;
    format!("L{key_counter}")
}

#[cfg(test)]
mod tests {
    use super::super::tree::XmlNode;
    use super::*;

    fn timed_line() -> LyricLine {
        LyricLine {
            dynamic_lyric: Some(vec![
                LyricWord {
                    time: 1000,
                    duration: 400,
                    word: "Hel".to_string(),
                },
                LyricWord {
                    time: 1400,
                    duration: 600,
                    word: "lo ".to_string(),
                },
            ]),
            dynamic_lyric_time: Some(1000),
            ..LyricLine::new(1000, 1000, "Hello")
        }
    }

    #[test]
    fn test_word_spans() {
        let mut p = XmlElement::new("p");
        append_line_text(&mut p, &timed_line());

        let spans: Vec<_> = p.child_elements().collect();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].attribute("begin"), Some("00:01.400"));
        assert_eq!(spans[1].attribute("end"), Some("00:02.000"));
        assert_eq!(spans[1].children, vec![XmlNode::Text("lo".to_string())]);
    }

    #[test]
    fn test_words_without_presence_flag_fall_back_to_text() {
        let line = LyricLine {
            dynamic_lyric_time: None,
            original_lyric: "  Hello  ".to_string(),
            ..timed_line()
        };
        let mut p = XmlElement::new("p");
        append_line_text(&mut p, &line);
        assert_eq!(p.children, vec![XmlNode::Text("Hello".to_string())]);
    }

    #[test]
    fn test_auxiliary_spans() {
        let line = LyricLine {
            translated_lyric: Some(" 你好 ".to_string()),
            roman_lyric: Some("   ".to_string()),
            ..LyricLine::new(0, 0, "Hello")
        };
        let mut p = XmlElement::new("p");
        append_auxiliary_spans(&mut p, &line, &TtmlExportOptions::default());

        let spans: Vec<_> = p.child_elements().collect();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].attribute("ttm:role"), Some("x-translation"));
        assert_eq!(spans[0].attribute("xml:lang"), Some("zh-CN"));
        assert_eq!(spans[0].children, vec![XmlNode::Text("你好".to_string())]);
    }

    #[test]
    fn test_background_span_uses_own_agent_and_next_key() {
        let background = LyricLine {
            should_align_right: true,
            roman_lyric: Some("o".to_string()),
            ..LyricLine::new(0, 0, " (oh) ")
        };
        let mut counter = 1;
        let options = TtmlExportOptions::default();
        let span = build_background_span(&background, &mut counter, &options);

        assert_eq!(counter, 2);
        assert_eq!(span.attribute("ttm:agent"), Some("v2"));
        assert_eq!(span.attribute("itunes:key"), Some("L2"));
        assert_eq!(span.children[0], XmlNode::Text("(oh)".to_string()));
        assert_eq!(
            span.child_elements().next().and_then(|e| e.attribute("ttm:role")),
            Some("x-roman")
        );
    }
}
