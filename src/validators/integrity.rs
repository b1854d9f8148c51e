//! 题目完整性校验
//!
//! 结构合法之后的第二道关卡：答案下标必须落在选项范围内，
//! 引用的每张图片必须真实存在于图片目录下。任何一条不满足，
//! 整道题就是废的，所以遇错即停，不做聚合。

use std::path::Path;

use crate::error::IntegrityError;
use crate::models::QuestionRecord;

/// 校验一道题的语义完整性
///
/// 依次执行：解析答案下标（整数原样、字符串按十进制解析）、
/// 范围检查、对题干和所有选项引用到的图片逐一 stat。
/// 成功时返回解析后的答案下标，Item Builder 不必再解析一遍。
pub fn check(record: &QuestionRecord, image_base_path: &Path) -> Result<usize, IntegrityError> {
    let answer_index = record.answer.resolve(record.options.len())?;

    for image in record.referenced_images() {
        let image_path = image_base_path.join(image);
        if !image_path.is_file() {
            return Err(IntegrityError::ImageNotFound {
                image: image.to_string(),
                expected_path: image_path.display().to_string(),
            });
        }
    }

    Ok(answer_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record(json: serde_json::Value) -> QuestionRecord {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_answer_out_of_range_fails() {
        let record = record(serde_json::json!({
            "question": "题干",
            "options": ["甲", "乙", "丙"],
            "answer": 5
        }));

        let err = check(&record, Path::new(".")).unwrap_err();
        assert!(matches!(
            err,
            IntegrityError::AnswerOutOfRange { index: 5, max_index: 2 }
        ));
    }

    #[test]
    fn test_non_numeric_answer_fails() {
        let record = record(serde_json::json!({
            "question": "题干",
            "options": ["甲", "乙"],
            "answer": "A"
        }));

        assert!(matches!(
            check(&record, Path::new(".")).unwrap_err(),
            IntegrityError::AnswerNotNumeric { .. }
        ));
    }

    #[test]
    fn test_missing_image_fails() {
        let dir = tempfile::tempdir().unwrap();
        let record = record(serde_json::json!({
            "question": "看图答题",
            "images": ["ghost.png"],
            "options": ["甲", "乙"],
            "answer": 0
        }));

        let err = check(&record, dir.path()).unwrap_err();
        match err {
            IntegrityError::ImageNotFound { image, .. } => assert_eq!(image, "ghost.png"),
            other => panic!("意外的错误类型: {:?}", other),
        }
    }

    #[test]
    fn test_valid_record_returns_resolved_index() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("q.png"), b"fake-png").unwrap();
        fs::write(dir.path().join("b.png"), b"fake-png").unwrap();

        let record = record(serde_json::json!({
            "question": "看图答题",
            "images": ["q.png"],
            "options": ["甲", {"text": "乙", "images": ["b.png"]}],
            "answer": "1"
        }));

        assert_eq!(check(&record, dir.path()).unwrap(), 1);
    }

    #[test]
    fn test_image_directory_not_regular_file() {
        // 同名目录不能顶替图片文件
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("fake.png")).unwrap();

        let record = record(serde_json::json!({
            "question": "看图",
            "images": ["fake.png"],
            "options": ["甲", "乙"],
            "answer": 0
        }));

        assert!(matches!(
            check(&record, dir.path()).unwrap_err(),
            IntegrityError::ImageNotFound { .. }
        ));
    }
}
