//! 题目结构校验
//!
//! 对一条松散的 bank 条目做纯形状检查：必填字段、字段类型、选项写法。
//! 所有违规项一起收集、一起报出，调用方跑一次就能把一批错误修完。

use serde_json::Value;

use crate::error::{SchemaError, SchemaViolation};

/// 题目允许的顶层字段
const QUESTION_FIELDS: &[&str] = &["question", "images", "options", "answer"];

/// 对象型选项允许的字段
const OPTION_FIELDS: &[&str] = &["text", "images"];

/// 校验一条 bank 条目的结构
///
/// 规则：
/// - `question` 必填，字符串
/// - `options` 必填，数组，至少 2 项；每项是字符串，或
///   `{text: 字符串, images?: [字符串]}`，不允许额外字段
/// - `answer` 必填，整数或字符串
/// - `images` 可选，字符串数组
/// - 不允许以上之外的字段
pub fn validate(record: &Value) -> Result<(), SchemaError> {
    let mut violations = Vec::new();

    let Some(obj) = record.as_object() else {
        return Err(SchemaError {
            violations: vec![violation("", "题目必须是 JSON 对象")],
        });
    };

    for key in obj.keys() {
        if !QUESTION_FIELDS.contains(&key.as_str()) {
            violations.push(violation(key, "不允许的额外字段 (additionalProperties)"));
        }
    }

    match obj.get("question") {
        None => violations.push(violation("question", "缺少必填字段")),
        Some(Value::String(_)) => {}
        Some(_) => violations.push(violation("question", "必须是字符串")),
    }

    if let Some(images) = obj.get("images") {
        check_string_array(images, "images", &mut violations);
    }

    match obj.get("options") {
        None => violations.push(violation("options", "缺少必填字段")),
        Some(Value::Array(items)) => {
            if items.len() < 2 {
                violations.push(violation(
                    "options",
                    format!("至少需要 2 个选项, 实际只有 {} 个", items.len()),
                ));
            }
            for (i, item) in items.iter().enumerate() {
                check_option(item, &format!("options -> {}", i), &mut violations);
            }
        }
        Some(_) => violations.push(violation("options", "必须是数组")),
    }

    match obj.get("answer") {
        None => violations.push(violation("answer", "缺少必填字段")),
        Some(value) if value.is_string() || value.is_i64() || value.is_u64() => {}
        Some(_) => violations.push(violation("answer", "必须是整数或字符串")),
    }

    if violations.is_empty() {
        Ok(())
    } else {
        // 按路径排序，输出稳定
        violations.sort();
        Err(SchemaError { violations })
    }
}

/// 校验一个选项：裸字符串，或 {text, images?} 对象
fn check_option(item: &Value, path: &str, violations: &mut Vec<SchemaViolation>) {
    match item {
        Value::String(_) => {}
        Value::Object(map) => {
            for key in map.keys() {
                if !OPTION_FIELDS.contains(&key.as_str()) {
                    violations.push(violation(
                        format!("{} -> {}", path, key),
                        "不允许的额外字段 (additionalProperties)",
                    ));
                }
            }
            match map.get("text") {
                None => violations.push(violation(format!("{} -> text", path), "缺少必填字段")),
                Some(Value::String(_)) => {}
                Some(_) => violations.push(violation(format!("{} -> text", path), "必须是字符串")),
            }
            if let Some(images) = map.get("images") {
                check_string_array(images, &format!("{} -> images", path), violations);
            }
        }
        _ => violations.push(violation(path, "选项必须是字符串或对象")),
    }
}

fn check_string_array(value: &Value, path: &str, violations: &mut Vec<SchemaViolation>) {
    match value {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if !item.is_string() {
                    violations.push(violation(format!("{} -> {}", path, i), "必须是字符串"));
                }
            }
        }
        _ => violations.push(violation(path, "必须是数组")),
    }
}

fn violation(path: impl Into<String>, message: impl Into<String>) -> SchemaViolation {
    SchemaViolation {
        path: path.into(),
        message: message.into(),
    }
}
