//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 把整条管线按固定顺序串起来，是整个系统的"指挥中心"：
//!
//! ```text
//! package_builder (整个题库)
//!     ↓
//! builder::item (逐题克隆填充)
//!     ↓
//! validators (能力层：schema / integrity)
//!     ↓
//! utils::fsops + xml (基础设施：磁盘、解析/序列化)
//! ```
//!
//! ## 设计原则
//!
//! 1. **严格顺序**：校验 → 构建 → 写文档 → 更新清单 → 复制 → 打包，
//!    数据只向前流动，后一阶段的产物不回流
//! 2. **遇错即停**：任何一步失败整个构建中止，不重试、不回滚，
//!    已写出的文件原样留在磁盘上
//! 3. **无业务逻辑**：只做调度，具体转换都在 builder / validators 里

pub mod package_builder;

pub use package_builder::build_qti_package;
