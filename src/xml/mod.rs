//! 通用 XML 文档树
//!
//! QTI 模板和 imsmanifest 的结构由第三方 schema 固定，本工具不拥有。
//! 因此这里不建具体类型，而是一棵保序的通用元素树（名字 + 属性 +
//! 子节点），在固定路径上再叠一层类型化的访问辅助函数。
//! 核心逻辑只依赖"解析 → 树 → 序列化"这条往返契约。

pub mod reader;
pub mod tree;
pub mod writer;

pub use reader::parse;
pub use tree::{Element, Node};
pub use writer::serialize;

/// XML 解析/序列化错误
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("XML 语法错误: {0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("XML 属性错误: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("XML 结构错误: {0}")]
    Malformed(String),

    #[error("XML 写出失败: {0}")]
    Write(String),
}

pub type XmlResult<T> = Result<T, XmlError>;
