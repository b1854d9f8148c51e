use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 模板目录（test.xml + imsmanifest.xml）
    pub sample_folder: PathBuf,
    /// 题库 JSON 文件
    pub json_file: PathBuf,
    /// 输出目录，同时作为 zip 包的基础名
    pub output_folder: PathBuf,
    /// 图片基准目录：题库里相对路径的图片都从这里找
    pub image_base: PathBuf,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Config {
    /// 由命令行参数生成配置
    ///
    /// `image_base` 取 JSON 文件所在目录，题库文档自己不携带这个值。
    pub fn from_cli(cli: Cli) -> Self {
        let image_base = cli
            .json_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            sample_folder: cli.sample_folder,
            json_file: cli.json_file,
            output_folder: cli.output_folder,
            image_base,
            verbose_logging: cli.verbose,
        }
    }
}
