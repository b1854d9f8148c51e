//! imsmanifest 资源清单更新
//!
//! 只做追加：已声明的 href 原位不动，缺的图片各补一个
//! `<file href="..."/>`，同一个 href 永远只出现一次，
//! 重复执行不改变结果。

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::xml::Element;

/// 把图片集合并进 manifest 树
pub fn update(manifest: &mut Element, image_files: &BTreeSet<String>) -> AppResult<()> {
    let resource = manifest
        .descendant_mut(&["resources", "resource"])
        .ok_or_else(|| AppError::missing_node("manifest > resources > resource"))?;

    let existing: BTreeSet<String> = resource
        .children_named("file")
        .filter_map(|file| file.attr("href"))
        .map(str::to_string)
        .collect();

    for image in image_files {
        if !existing.contains(image) {
            debug!("添加图片到 manifest: {}", image);
            let mut file = Element::new("file");
            file.set_attr("href", image.clone());
            resource.push_element(file);
        }
    }

    Ok(())
}
