use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::bank::RawBank;

/// 从 JSON 文件加载题库文档
///
/// 只要求顶层是 `{title, bank: [...]}`；bank 的每一项保持松散，
/// 留给结构校验器逐项检查。
pub fn load_bank(json_file_path: &Path) -> Result<RawBank> {
    let content = fs::read_to_string(json_file_path)
        .with_context(|| format!("无法读取JSON文件: {}", json_file_path.display()))?;

    let bank: RawBank = serde_json::from_str(&content)
        .with_context(|| format!("无法解析JSON文件: {}", json_file_path.display()))?;

    tracing::debug!("成功加载题库 '{}', 共 {} 道题", bank.title, bank.bank.len());

    Ok(bank)
}
