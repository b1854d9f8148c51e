//! QTI 打包流程编排

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::builder;
use crate::config::Config;
use crate::error::AppError;
use crate::models;
use crate::utils::fsops;
use crate::xml::{self, Element};

/// 试卷模板文件名
const TEST_XML: &str = "test.xml";
/// 资源清单文件名
const MANIFEST_XML: &str = "imsmanifest.xml";

/// 构建完整的 QTI 题库包
///
/// 顺序执行：加载题库 JSON → 加载 test.xml 模板 → 逐题校验并构建 →
/// 写出 test.xml → 更新并写出 imsmanifest.xml → 复制图片 → 打 zip 包。
/// 任何一步失败立即中止，已写出的文件不清理。
pub fn build_qti_package(config: &Config) -> Result<()> {
    info!("🚀 开始构建 QTI 题库包...");

    info!("读取题库 JSON: {}", config.json_file.display());
    let bank = models::load_bank(&config.json_file)?;

    let template = load_xml(&config.sample_folder.join(TEST_XML))?;
    let (document, image_files) = builder::build(&template, &bank, &config.image_base)?;

    fsops::ensure_dir(&config.output_folder)?;
    write_xml(&document, &config.output_folder.join(TEST_XML))?;

    info!("更新 imsmanifest.xml 的图片资源...");
    let mut manifest = load_xml(&config.sample_folder.join(MANIFEST_XML))?;
    builder::update(&mut manifest, &image_files)?;
    write_xml(&manifest, &config.output_folder.join(MANIFEST_XML))?;

    fsops::copy_images(&image_files, &config.image_base, &config.output_folder)?;

    let zip_path = fsops::archive_dir(&config.output_folder)?;

    info!("✅ QTI 题库包构建完成: {}", zip_path.display());

    Ok(())
}

/// 读取并解析一个 XML 文件
fn load_xml(path: &Path) -> Result<Element> {
    debug!("加载 XML 文件: {}", path.display());

    if !path.is_file() {
        return Err(AppError::missing_resource(path.display().to_string()).into());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    xml::parse(&content).with_context(|| format!("无法解析XML文件: {}", path.display()))
}

/// 序列化并写出一个 XML 文件
fn write_xml(document: &Element, path: &Path) -> Result<()> {
    debug!("写出 XML 文件: {}", path.display());

    let content = xml::serialize(document)?;
    fs::write(path, content)
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

    Ok(())
}
