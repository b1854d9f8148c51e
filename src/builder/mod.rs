//! 构建层 - 核心转换
//!
//! 把校验过的题目灌进 QTI 模板树：
//!
//! - `material` - 把"文字 + 图片列表"渲染成 material/mattext 块，
//!   图片引用统一从这里进入收集集合
//! - `item` - 以模板里的样例 item 为原型，逐题深拷贝、填充、重编号
//! - `manifest` - 把收集到的图片集合并进 imsmanifest 的资源清单

pub mod item;
pub mod manifest;
pub mod material;

pub use item::build;
pub use manifest::update;
pub use material::render;
