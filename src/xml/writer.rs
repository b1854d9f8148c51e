//! 元素树 → 带声明的美化 XML 文本

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::tree::{Element, Node};
use super::{XmlError, XmlResult};

/// 将元素树序列化为完整的 XML 文档文本
///
/// 带 `<?xml version="1.0" encoding="utf-8"?>` 声明，tab 缩进，
/// 与解析端构成往返契约：结构、属性顺序、文本内容全部保持。
pub fn serialize(root: &Element) -> XmlResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);
    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
    )?;
    write_element(&mut writer, root)?;

    let bytes = writer.into_inner();
    // Writer 只会产出合法 UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> XmlResult<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    for child in &element.children {
        match child {
            Node::Element(el) => write_element(writer, el)?,
            Node::Text(text) => {
                emit(writer, Event::Text(BytesText::new(text)))?;
            }
            Node::CData(text) => {
                emit(writer, Event::CData(BytesCData::new(text.as_str())))?;
            }
        }
    }
    emit(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> XmlResult<()> {
    writer
        .write_event(event)
        .map_err(|e| XmlError::Write(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse;

    #[test]
    fn test_round_trip_preserves_structure() {
        let source = r#"<?xml version="1.0" encoding="utf-8"?>
<questestinterop>
  <assessment title="样卷 &amp; 测试">
    <section ident="root_section">
      <item ident="1" title="Question 01">
        <presentation>
          <material>
            <mattext texttype="text/plain">题干</mattext>
          </material>
        </presentation>
      </item>
    </section>
  </assessment>
</questestinterop>"#;

        let tree = parse(source).unwrap();
        let text = serialize(&tree).unwrap();
        let reparsed = parse(&text).unwrap();

        assert_eq!(tree, reparsed);
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    }

    #[test]
    fn test_cdata_survives_round_trip() {
        let mut mattext = Element::new("mattext");
        mattext.set_attr("texttype", "text/html");
        mattext
            .children
            .push(Node::CData("<div>文字</div>\n<p><img src=\"$IMS-CC-FILEBASE$/a.png\" /></p>".to_string()));

        let text = serialize(&mattext).unwrap();
        assert!(text.contains("<![CDATA[<div>文字</div>"));

        let reparsed = parse(&text).unwrap();
        assert_eq!(reparsed.text(), mattext.text());
    }

    #[test]
    fn test_empty_element_self_closes() {
        let mut file = Element::new("file");
        file.set_attr("href", "img.png");
        let text = serialize(&file).unwrap();
        assert!(text.contains("<file href=\"img.png\"/>"));
    }
}
