//! # TTML 生成器 - 文档树模块
//!
//! 生成器先构建一棵类型化的 XML 树，再交给序列化器输出。
//! 转义由序列化器负责，树中保存的都是原始文本。

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum XmlNode {
    Element(XmlElement),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct XmlElement {
    pub(super) name: &'static str,
    pub(super) attributes: Vec<(&'static str, String)>,
    pub(super) children: Vec<XmlNode>,
}

impl XmlElement {
    pub(super) const fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// 追加一个属性，属性按追加顺序输出。
    #[must_use]
    pub(super) fn with_attribute(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    #[must_use]
    pub(super) fn with_child(mut self, child: Self) -> Self {
        self.push_child(child);
        self
    }

    pub(super) fn push_child(&mut self, child: Self) {
        self.children.push(XmlNode::Element(child));
    }

    /// 追加文本节点。空文本不会产生节点。
    pub(super) fn push_text(&mut self, text: &str) {
        if !text.is_empty() {
            self.children.push(XmlNode::Text(text.to_string()));
        }
    }

    /// 按名称查找属性值。
    #[cfg(test)]
    pub(super) fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 所有子元素（跳过文本节点）。
    #[cfg(test)]
    pub(super) fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_not_added() {
        let mut p = XmlElement::new("p");
        p.push_text("");
        assert!(p.children.is_empty());

        p.push_text("hi");
        assert_eq!(p.children, vec![XmlNode::Text("hi".to_string())]);
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let span = XmlElement::new("span")
            .with_attribute("end", "00:01.000")
            .with_attribute("begin", "00:00.000");
        assert_eq!(span.attributes[0].0, "end");
        assert_eq!(span.attribute("begin"), Some("00:00.000"));
        assert_eq!(span.attribute("dur"), None);
    }

    #[test]
    fn test_child_elements_skip_text() {
        let mut p = XmlElement::new("p");
        p.push_text("a");
        p.push_child(XmlElement::new("span"));
        let names: Vec<_> = p.child_elements().map(|e| e.name).collect();
        assert_eq!(names, vec!["span"]);
    }
}
