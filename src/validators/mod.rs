//! 校验层 - 业务能力层
//!
//! 两道独立的关卡，只处理单个题目：
//!
//! - `schema` - 结构校验：字段齐不齐、类型对不对，收集全部违规项
//!   一次性报出，代价只是遍历一个 JSON 对象
//! - `integrity` - 完整性校验：答案下标是否越界、引用的图片是否真的
//!   在磁盘上，涉及文件系统 stat，只在结构已知合法之后才跑，
//!   且遇到第一个问题立即失败

pub mod integrity;
pub mod schema;

pub use integrity::check;
pub use schema::validate;
