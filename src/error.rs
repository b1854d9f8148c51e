use std::fmt;

use crate::xml::XmlError;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 题目结构校验错误（聚合所有违规项）
    Schema(SchemaError),
    /// 题目语义完整性错误（首个违规项即中止）
    Integrity(IntegrityError),
    /// 模板结构错误
    Template(TemplateError),
    /// 打包阶段资源缺失错误
    Resource(MissingResourceError),
    /// XML 解析/序列化错误
    Xml(XmlError),
    /// 文件操作错误
    File(FileError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Schema(e) => write!(f, "结构校验错误: {}", e),
            AppError::Integrity(e) => write!(f, "完整性错误: {}", e),
            AppError::Template(e) => write!(f, "模板错误: {}", e),
            AppError::Resource(e) => write!(f, "资源缺失: {}", e),
            AppError::Xml(e) => write!(f, "XML错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Schema(e) => Some(e),
            AppError::Integrity(e) => Some(e),
            AppError::Template(e) => Some(e),
            AppError::Resource(e) => Some(e),
            AppError::Xml(e) => Some(e),
            AppError::File(e) => Some(e),
        }
    }
}

/// 单条结构违规项：定位路径 + 说明
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SchemaViolation {
    /// 定位路径，如 `options -> 2`
    pub path: String,
    /// 违规说明
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.path, self.message)
    }
}

/// 题目结构校验错误
///
/// 聚合一道题目的全部违规项，方便调用方一次性修完一批错误，
/// 而不是改一处跑一次。
#[derive(Debug)]
pub struct SchemaError {
    pub violations: Vec<SchemaViolation>,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JSON 校验失败:")?;
        for v in &self.violations {
            write!(f, "\n{}", v)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// 题目语义完整性错误
#[derive(Debug)]
pub enum IntegrityError {
    /// 答案不是整数也不是数字字符串
    AnswerNotNumeric { value: String },
    /// 答案索引超出选项范围
    AnswerOutOfRange { index: i64, max_index: usize },
    /// 引用的图片文件不存在
    ImageNotFound {
        image: String,
        expected_path: String,
    },
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityError::AnswerNotNumeric { value } => {
                write!(f, "答案必须是整数索引或数字字符串: '{}'", value)
            }
            IntegrityError::AnswerOutOfRange { index, max_index } => {
                write!(f, "答案索引 {} 超出范围 [0, {}]", index, max_index)
            }
            IntegrityError::ImageNotFound {
                image,
                expected_path,
            } => {
                write!(f, "图片文件不存在: {} (期望路径: {})", image, expected_path)
            }
        }
    }
}

impl std::error::Error for IntegrityError {}

/// 模板结构错误
#[derive(Debug)]
pub enum TemplateError {
    /// 模板中找不到固定路径上的节点
    MissingNode { path: String },
    /// 模板的 section 中没有可作为原型的 item
    MissingPrototype,
    /// 题库为空，无法生成试卷
    EmptyBank,
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::MissingNode { path } => {
                write!(f, "模板缺少节点: {}", path)
            }
            TemplateError::MissingPrototype => {
                write!(
                    f,
                    "模板缺少样例 item (期望路径: questestinterop > assessment > section > item)"
                )
            }
            TemplateError::EmptyBank => write!(f, "题库 bank 为空，无题可生成"),
        }
    }
}

impl std::error::Error for TemplateError {}

/// 打包阶段资源缺失错误
///
/// 完整性检查通过之后、实际使用之时文件已不在原处。
#[derive(Debug)]
pub struct MissingResourceError {
    pub path: String,
}

impl fmt::Display for MissingResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl std::error::Error for MissingResourceError {}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: std::io::Error,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: std::io::Error,
    },
    /// 复制文件失败
    CopyFailed {
        path: String,
        source: std::io::Error,
    },
    /// 压缩归档失败
    ArchiveFailed { path: String, message: String },
    /// JSON 解析失败
    JsonParseFailed { source: serde_json::Error },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
            FileError::CopyFailed { path, source } => {
                write!(f, "复制文件失败 ({}): {}", path, source)
            }
            FileError::ArchiveFailed { path, message } => {
                write!(f, "生成压缩包失败 ({}): {}", path, message)
            }
            FileError::JsonParseFailed { source } => {
                write!(f, "JSON解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. }
            | FileError::WriteFailed { source, .. }
            | FileError::CopyFailed { source, .. } => Some(source),
            FileError::JsonParseFailed { source } => Some(source),
            FileError::ArchiveFailed { .. } => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========

impl From<SchemaError> for AppError {
    fn from(err: SchemaError) -> Self {
        AppError::Schema(err)
    }
}

impl From<IntegrityError> for AppError {
    fn from(err: IntegrityError) -> Self {
        AppError::Integrity(err)
    }
}

impl From<TemplateError> for AppError {
    fn from(err: TemplateError) -> Self {
        AppError::Template(err)
    }
}

impl From<MissingResourceError> for AppError {
    fn from(err: MissingResourceError) -> Self {
        AppError::Resource(err)
    }
}

impl From<XmlError> for AppError {
    fn from(err: XmlError) -> Self {
        AppError::Xml(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::File(FileError::JsonParseFailed { source: err })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建资源缺失错误
    pub fn missing_resource(path: impl Into<String>) -> Self {
        AppError::Resource(MissingResourceError { path: path.into() })
    }

    /// 创建模板节点缺失错误
    pub fn missing_node(path: impl Into<String>) -> Self {
        AppError::Template(TemplateError::MissingNode { path: path.into() })
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
