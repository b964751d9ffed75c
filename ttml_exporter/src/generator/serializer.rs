//! # TTML 生成器 - 序列化模块
//!
//! 使用 `quick-xml` 将文档树写成字符串。特殊字符的转义全部在这里完成。

use std::io::{Cursor, Write};

use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use ttml_db_core::ConvertError;

use super::tree::{XmlElement, XmlNode};

/// 将文档树序列化为字符串。
///
/// `indent_size` 为 `Some` 时输出格式化的文本：只在标签之间插入换行和缩进，
/// 不会改动任何文本节点。
pub(super) fn serialize_document(
    root: &XmlElement,
    indent_size: Option<usize>,
) -> Result<String, ConvertError> {
    let mut buffer = Vec::new();

    if let Some(indent_size) = indent_size {
        let mut writer = Writer::new_with_indent(Cursor::new(&mut buffer), b' ', indent_size);
        write_element(&mut writer, root)?;
    } else {
        let mut writer = Writer::new(Cursor::new(&mut buffer));
        write_element(&mut writer, root)?;
    }

    String::from_utf8(buffer).map_err(ConvertError::FromUtf8)
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    element: &XmlElement,
) -> Result<(), ConvertError> {
    let mut start = BytesStart::new(element.name);
    for (key, value) in &element.attributes {
        start.push_attribute((*key, value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        match child {
            XmlNode::Element(child) => write_element(writer, child)?,
            XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name)))?;
    Ok(())
}
