//! 文件系统协作方
//!
//! 核心管线只通过这几个窄接口碰磁盘：建目录、复制图片、打包。

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::error::{AppError, AppResult, FileError};

/// 幂等地创建输出目录
pub fn ensure_dir(path: &Path) -> AppResult<()> {
    fs::create_dir_all(path)
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))
}

/// 把引用到的图片从源目录复制到输出目录
///
/// 目标已存在则跳过。源文件缺失说明完整性检查之后文件被动过，
/// 按资源缺失中止。
pub fn copy_images(
    image_files: &BTreeSet<String>,
    source_folder: &Path,
    output_folder: &Path,
) -> AppResult<()> {
    info!("复制图片文件...");

    for image in image_files {
        let src_path = source_folder.join(image);
        let dst_path = output_folder.join(image);

        debug!("复制 {}", image);

        if !src_path.exists() {
            return Err(AppError::missing_resource(src_path.display().to_string()));
        }

        if !dst_path.exists() {
            fs::copy(&src_path, &dst_path).map_err(|e| {
                AppError::File(FileError::CopyFailed {
                    path: src_path.display().to_string(),
                    source: e,
                })
            })?;
        }
    }

    Ok(())
}

/// 把输出目录打成 zip 包
///
/// 压缩包与目录同级，名为 `<目录名>.zip`，条目位于包根
/// （不再套一层目录）。返回压缩包路径。
pub fn archive_dir(output_folder: &Path) -> AppResult<PathBuf> {
    let mut zip_name = output_folder.as_os_str().to_os_string();
    zip_name.push(".zip");
    let zip_path = PathBuf::from(zip_name);
    info!("生成压缩包: {}", zip_path.display());

    let archive_err = |message: String| {
        AppError::File(FileError::ArchiveFailed {
            path: zip_path.display().to_string(),
            message,
        })
    };

    let file = fs::File::create(&zip_path)
        .map_err(|e| AppError::file_write_failed(zip_path.display().to_string(), e))?;
    let mut writer = ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut entries: Vec<PathBuf> = fs::read_dir(output_folder)
        .map_err(|e| AppError::file_read_failed(output_folder.display().to_string(), e))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    // 条目顺序固定，包内容可复现
    entries.sort();

    for path in entries {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!("打包 {}", name);

        writer
            .start_file(name, options)
            .map_err(|e| archive_err(e.to_string()))?;
        let mut source = fs::File::open(&path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        io::copy(&mut source, &mut writer).map_err(|e| archive_err(e.to_string()))?;
    }

    writer.finish().map_err(|e| archive_err(e.to_string()))?;

    Ok(zip_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ensure_dir_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("output");

        ensure_dir(&target).unwrap();
        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_copy_images_skips_existing_destination() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        fs::write(src.path().join("a.png"), b"new-bytes").unwrap();
        fs::write(dst.path().join("a.png"), b"old-bytes").unwrap();

        copy_images(&image_set(&["a.png"]), src.path(), dst.path()).unwrap();

        // 已存在的目标不被覆盖
        assert_eq!(fs::read(dst.path().join("a.png")).unwrap(), b"old-bytes");
    }

    #[test]
    fn test_copy_images_missing_source_fails() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        let err = copy_images(&image_set(&["gone.png"]), src.path(), dst.path()).unwrap_err();
        assert!(matches!(err, AppError::Resource(_)));
    }

    #[test]
    fn test_archive_dir_contains_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("package");
        fs::create_dir(&output).unwrap();
        fs::write(output.join("test.xml"), b"<x/>").unwrap();
        fs::write(output.join("a.png"), b"png").unwrap();

        let zip_path = archive_dir(&output).unwrap();
        assert_eq!(zip_path, dir.path().join("package.zip"));

        let mut archive =
            zip::ZipArchive::new(fs::File::open(&zip_path).unwrap()).unwrap();
        let names: BTreeSet<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, image_set(&["a.png", "test.xml"]));
    }
}
