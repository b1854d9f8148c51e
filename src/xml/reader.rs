//! XML 文本 → 元素树

use quick_xml::events::Event;
use quick_xml::Reader;

use super::tree::{Element, Node};
use super::{XmlError, XmlResult};

/// 解析一段 XML 文本，返回根元素
///
/// 忽略声明、注释和处理指令；纯空白文本不进树。
pub fn parse(content: &str) -> XmlResult<Element> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text_start = true;
    reader.config_mut().trim_text_end = true;

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push(element_from_start(&e)?);
            }
            Event::Empty(e) => {
                let element = element_from_start(&e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    XmlError::Malformed("结束标签多于开始标签".to_string())
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|err| XmlError::Malformed(format!("非法文本内容: {}", err)))?
                    .into_owned();
                if text.is_empty() {
                    continue;
                }
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Text(text)),
                    None => {
                        return Err(XmlError::Malformed(format!(
                            "根元素之外出现文本: '{}'",
                            text
                        )))
                    }
                }
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::CData(text)),
                    None => {
                        return Err(XmlError::Malformed(
                            "根元素之外出现 CDATA".to_string(),
                        ))
                    }
                }
            }
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if !stack.is_empty() {
        return Err(XmlError::Malformed(format!(
            "未闭合的标签: {}",
            stack.last().map(|el| el.name.as_str()).unwrap_or("?")
        )));
    }

    root.ok_or_else(|| XmlError::Malformed("文档中没有根元素".to_string()))
}

fn element_from_start(e: &quick_xml::events::BytesStart<'_>) -> XmlResult<Element> {
    let mut element = Element::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());

    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| XmlError::Malformed(format!("非法属性值: {}", err)))?
            .into_owned();
        element.attributes.push((key, value));
    }

    Ok(element)
}

/// 把构建完成的元素挂到父元素下，或者认定为根元素
fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> XmlResult<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Element(element));
            Ok(())
        }
        None => {
            if root.is_some() {
                return Err(XmlError::Malformed("文档中出现多个根元素".to_string()));
            }
            *root = Some(element);
            Ok(())
        }
    }
}
