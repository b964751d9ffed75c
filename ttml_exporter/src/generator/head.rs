//! # TTML 生成器 - Head 处理模块
//!
//! 该模块负责生成 TTML 文件的 `<head>` 部分，即 `<metadata>` 中的演唱者列表。

use ttml_db_core::LyricLine;

use super::tree::XmlElement;

/// 文档中的演唱者。每个文档最多两位。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Agent {
    /// 默认演唱者，总是存在
    Main,
    /// 右对齐的行使用的第二位演唱者
    Alternate,
}

impl Agent {
    pub(super) const fn for_alignment(should_align_right: bool) -> Self {
        if should_align_right {
            Self::Alternate
        } else {
            Self::Main
        }
    }

    pub(super) const fn id(self) -> &'static str {
        match self {
            Self::Main => "v1",
            Self::Alternate => "v2",
        }
    }

    const fn type_str(self) -> &'static str {
        match self {
            Self::Main => "person",
            Self::Alternate => "other",
        }
    }
}

/// 检查所有歌词行（包括背景人声）中是否有需要第二位演唱者的行。
pub(super) fn needs_alternate_agent(lines: &[LyricLine]) -> bool {
    lines.iter().any(LyricLine::requests_alternate_agent)
}

pub(super) fn build_head(with_alternate_agent: bool) -> XmlElement {
    let mut metadata = XmlElement::new("metadata").with_child(agent_element(Agent::Main));
    if with_alternate_agent {
        metadata.push_child(agent_element(Agent::Alternate));
    }

    XmlElement::new("head").with_child(metadata)
}

fn agent_element(agent: Agent) -> XmlElement {
    XmlElement::new("ttm:agent")
        .with_attribute("type", agent.type_str())
        .with_attribute("xml:id", agent.id())
}
