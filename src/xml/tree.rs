//! 保序的通用 XML 元素树

/// 一个 XML 元素：名字、属性、子节点，全部保持文档顺序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// 属性按出现顺序保存为 (名, 值) 对
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// 元素的一个子节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
}

impl Element {
    /// 创建一个空元素
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// 读取属性值
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// 设置属性值；已存在则原位覆盖，保持属性顺序不变
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// 第一个指定名字的子元素
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find_map(|node| match node {
            Node::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    /// 第一个指定名字的子元素（可变）
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    /// 所有指定名字的子元素，按文档顺序
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter_map(move |node| match node {
            Node::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    /// 沿固定路径向下取后代元素（每层取第一个同名子元素）
    pub fn descendant(&self, path: &[&str]) -> Option<&Element> {
        let mut current = self;
        for name in path {
            current = current.child(name)?;
        }
        Some(current)
    }

    /// 沿固定路径向下取后代元素（可变）
    pub fn descendant_mut(&mut self, path: &[&str]) -> Option<&mut Element> {
        let mut current = self;
        for name in path {
            current = current.child_mut(name)?;
        }
        Some(current)
    }

    /// 追加一个子元素
    pub fn push_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// 删除所有指定名字的子元素，其余子节点保持原顺序
    pub fn remove_children_named(&mut self, name: &str) {
        self.children
            .retain(|node| !matches!(node, Node::Element(el) if el.name == name));
    }

    /// 原位替换第一个指定名字的子元素，保持它在兄弟节点中的位置
    ///
    /// 返回是否找到并替换成功。
    pub fn replace_child(&mut self, name: &str, replacement: Element) -> bool {
        for node in self.children.iter_mut() {
            if matches!(node, Node::Element(el) if el.name == name) {
                *node = Node::Element(replacement);
                return true;
            }
        }
        false
    }

    /// 将文本内容整体替换为一个纯文本子节点
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    /// 拼接所有直接文本/CDATA 子节点
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(t) | Node::CData(t) => out.push_str(t),
                Node::Element(_) => {}
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        let mut root = Element::new("root");
        root.set_attr("title", "旧标题");
        let mut a = Element::new("item");
        a.set_attr("ident", "1");
        a.set_text("第一");
        let mut b = Element::new("item");
        b.set_attr("ident", "2");
        root.push_element(a);
        root.push_element(Element::new("other"));
        root.push_element(b);
        root
    }

    #[test]
    fn test_attr_overwrite_keeps_position() {
        let mut root = sample();
        root.set_attr("lang", "zh");
        root.set_attr("title", "新标题");

        // title 仍在第一个位置
        assert_eq!(root.attributes[0], ("title".to_string(), "新标题".to_string()));
        assert_eq!(root.attr("lang"), Some("zh"));
    }

    #[test]
    fn test_child_and_children_named() {
        let root = sample();
        assert_eq!(root.child("item").unwrap().attr("ident"), Some("1"));
        let idents: Vec<_> = root
            .children_named("item")
            .map(|el| el.attr("ident").unwrap())
            .collect();
        assert_eq!(idents, vec!["1", "2"]);
    }

    #[test]
    fn test_remove_children_named_keeps_others() {
        let mut root = sample();
        root.remove_children_named("item");
        assert!(root.child("item").is_none());
        assert!(root.child("other").is_some());
    }

    #[test]
    fn test_replace_child_in_place() {
        let mut root = sample();
        let mut replacement = Element::new("item");
        replacement.set_attr("ident", "99");

        assert!(root.replace_child("item", replacement));
        // 替换的是第一个 item，且位置不变
        assert_eq!(root.children_named("item").count(), 2);
        assert_eq!(root.child("item").unwrap().attr("ident"), Some("99"));
        assert!(!root.replace_child("nonexistent", Element::new("x")));
    }

    #[test]
    fn test_descendant_path() {
        let mut root = Element::new("a");
        let mut b = Element::new("b");
        b.push_element(Element::new("c"));
        root.push_element(b);

        assert!(root.descendant(&["b", "c"]).is_some());
        assert!(root.descendant(&["b", "x"]).is_none());
    }

    #[test]
    fn test_text_concat() {
        let mut el = Element::new("mattext");
        el.children.push(Node::Text("你好".to_string()));
        el.children.push(Node::CData("<b>world</b>".to_string()));
        assert_eq!(el.text(), "你好<b>world</b>");
    }
}
