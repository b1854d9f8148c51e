use serde::Deserialize;

use crate::error::IntegrityError;

/// 题库原始文档
///
/// bank 的每一项先以松散 JSON 形式保留，等结构校验通过后
/// 再归一化为 [`QuestionRecord`]，松散数据不会越过校验边界。
#[derive(Debug, Clone, Deserialize)]
pub struct RawBank {
    pub title: String,
    pub bank: Vec<serde_json::Value>,
}

/// 归一化后的单道选择题
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub options: Vec<OptionRecord>,
    pub answer: AnswerKey,
}

impl QuestionRecord {
    /// 题干和所有选项引用到的图片名，按出现顺序去重后返回
    pub fn referenced_images(&self) -> Vec<&str> {
        let mut images: Vec<&str> = Vec::new();
        for img in &self.images {
            if !images.contains(&img.as_str()) {
                images.push(img);
            }
        }
        for option in &self.options {
            for img in &option.images {
                if !images.contains(&img.as_str()) {
                    images.push(img);
                }
            }
        }
        images
    }
}

/// 归一化后的单个选项
///
/// JSON 里允许两种写法：裸字符串（无图片）或
/// `{"text": "...", "images": [...]}` 对象，反序列化时统一成本结构。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRecord {
    pub text: String,
    pub images: Vec<String>,
}

impl<'de> Deserialize<'de> for OptionRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Visitor;
        use std::fmt;

        struct OptionVisitor;

        impl<'de> Visitor<'de> for OptionVisitor {
            type Value = OptionRecord;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or an object with text and optional images")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(OptionRecord {
                    text: value.to_string(),
                    images: Vec::new(),
                })
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[derive(Deserialize)]
                struct RawOption {
                    text: String,
                    #[serde(default)]
                    images: Vec<String>,
                }

                let raw = RawOption::deserialize(serde::de::value::MapAccessDeserializer::new(map))?;
                Ok(OptionRecord {
                    text: raw.text,
                    images: raw.images,
                })
            }
        }

        deserializer.deserialize_any(OptionVisitor)
    }
}

/// 答案键：JSON 里既可以写整数也可以写数字字符串
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerKey {
    Index(i64),
    Text(String),
}

impl AnswerKey {
    /// 解析为选项下标并做范围检查
    pub fn resolve(&self, option_count: usize) -> Result<usize, IntegrityError> {
        let index = match self {
            AnswerKey::Index(i) => *i,
            AnswerKey::Text(s) => {
                s.trim()
                    .parse::<i64>()
                    .map_err(|_| IntegrityError::AnswerNotNumeric { value: s.clone() })?
            }
        };

        if index < 0 || index as usize >= option_count {
            return Err(IntegrityError::AnswerOutOfRange {
                index,
                max_index: option_count.saturating_sub(1),
            });
        }

        Ok(index as usize)
    }
}

impl<'de> Deserialize<'de> for AnswerKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Visitor;
        use std::fmt;

        struct AnswerVisitor;

        impl<'de> Visitor<'de> for AnswerVisitor {
            type Value = AnswerKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer index or a numeric string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(AnswerKey::Text(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(AnswerKey::Index(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(AnswerKey::Index(value as i64))
            }
        }

        deserializer.deserialize_any(AnswerVisitor)
    }
}
