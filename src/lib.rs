//! # json2qti
//!
//! 把 JSON 题库转换为 QTI XML 题库包的命令行工具
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构，数据只向前流动：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `xml/` - 保序的通用 XML 元素树 + quick-xml 解析/序列化
//! - `utils/fsops` - 建目录、复制图片、打 zip 包的窄接口
//!
//! ### ② 业务能力层（Validators / Builder）
//! - `validators/schema` - 结构校验，聚合报出全部违规项
//! - `validators/integrity` - 答案下标和图片存在性校验，遇错即停
//! - `builder/material` - "文字 + 图片" → material 块，收集图片引用
//! - `builder/item` - 原型深拷贝、逐题填充、重编号
//! - `builder/manifest` - imsmanifest 资源清单的幂等追加
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/package_builder` - 按固定顺序串起整条管线：
//!   校验 → 构建 → 写文档 → 更新清单 → 复制图片 → 打包
//!
//! ### ④ 外壳（CLI）
//! - `cli` / `config` / `logger` - 参数、配置、日志，不含业务逻辑

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod utils;
pub mod validators;
pub mod xml;

// 重新导出常用类型
pub use cli::Cli;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnswerKey, OptionRecord, QuestionRecord, RawBank};
pub use orchestrator::build_qti_package;
