//! material 块渲染
//!
//! 文字在前，图片按声明顺序跟在后面。图片路径带
//! `$IMS-CC-FILEBASE$` 前缀，这个约定由导入方（Canvas 等 LMS）
//! 解释，本工具只负责原样写出。

use std::collections::BTreeSet;

use crate::xml::{Element, Node};

/// LMS 端约定的打包文件根路径占位符
pub const FILEBASE_PREFIX: &str = "$IMS-CC-FILEBASE$";

/// 渲染一个 material 块
///
/// 产出 `<material><mattext texttype="text/html">CDATA</mattext></material>`，
/// CDATA 内容为 `<div>文字</div>` 加上每张图片一个居中的 `<p><img/></p>`。
/// 除了把图片名并入 `image_set` 之外没有任何副作用，也不碰文件系统
/// （图片存在性在完整性校验阶段已经确认过）。
pub fn render(text: &str, images: &[String], image_set: &mut BTreeSet<String>) -> Element {
    let mut html_parts = vec![format!("<div>{}</div>", text)];

    for img in images {
        html_parts.push(format!(
            "<p style=\"text-align:center;\"><img src=\"{}/{}\" style=\"max-width:90%;\" /></p>",
            FILEBASE_PREFIX, img
        ));
        image_set.insert(img.clone());
    }

    let mut mattext = Element::new("mattext");
    mattext.set_attr("texttype", "text/html");
    mattext.children.push(Node::CData(html_parts.join("\n")));

    let mut material = Element::new("material");
    material.push_element(mattext);
    material
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_only() {
        let mut image_set = BTreeSet::new();
        let material = render("这是题干", &[], &mut image_set);

        let mattext = material.child("mattext").unwrap();
        assert_eq!(mattext.attr("texttype"), Some("text/html"));
        assert_eq!(mattext.text(), "<div>这是题干</div>");
        assert!(image_set.is_empty());
    }

    #[test]
    fn test_render_with_images_in_declared_order() {
        let mut image_set = BTreeSet::new();
        let images = vec!["z.png".to_string(), "a.png".to_string()];
        let material = render("看图", &images, &mut image_set);

        let html = material.child("mattext").unwrap().text();
        // 渲染顺序跟声明顺序一致，不受集合排序影响
        let z_pos = html.find("$IMS-CC-FILEBASE$/z.png").unwrap();
        let a_pos = html.find("$IMS-CC-FILEBASE$/a.png").unwrap();
        assert!(z_pos < a_pos);

        assert_eq!(
            image_set.iter().cloned().collect::<Vec<_>>(),
            vec!["a.png".to_string(), "z.png".to_string()]
        );
    }

    #[test]
    fn test_render_accumulates_across_calls() {
        let mut image_set = BTreeSet::new();
        render("题干", &["a.png".to_string()], &mut image_set);
        render("选项", &["a.png".to_string(), "b.png".to_string()], &mut image_set);

        assert_eq!(image_set.len(), 2);
    }
}
