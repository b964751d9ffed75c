//! # TTML 生成器 - 段落分组模块
//!
//! 将连续的前景歌词行划分为段落，每个段落对应一个 `<div>`。
//! 原文为空的行是段落之间的分隔符。

use ttml_db_core::LyricLine;

/// 从左到右扫描一次，将歌词行分组为段落。
///
/// - 背景人声行被完全跳过，既不进入段落也不会结束段落。
/// - 原文为空的行结束当前段落（当前段落为空时什么也不做）。
/// - 其余行追加到当前段落。
///
/// 返回的每个段落都不为空。
pub(super) fn group_paragraphs(lines: &[LyricLine]) -> Vec<Vec<&LyricLine>> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&LyricLine> = Vec::new();

    for line in lines {
        if line.is_background_lyric {
            continue;
        }

        if line.original_lyric.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    tracing::trace!(
        paragraphs = paragraphs.len(),
        lines = lines.len(),
        "歌词行分组完成"
    );
    paragraphs
}
