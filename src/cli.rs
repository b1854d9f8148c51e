use clap::Parser;
use std::path::PathBuf;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "json2qti")]
#[command(version, about = "把 JSON 题库转换为 QTI XML 题库包", long_about = None)]
pub struct Cli {
    /// 模板目录（需包含 test.xml 和 imsmanifest.xml）
    #[arg(long = "sample_folder", default_value = "xml-sample/sample-image")]
    pub sample_folder: PathBuf,

    /// 题库 JSON 文件（引用的图片与它同目录）
    #[arg(
        long = "json_file",
        default_value = "json-sample/sample_image_question.json"
    )]
    pub json_file: PathBuf,

    /// 输出目录，同时作为 zip 包的基础名
    #[arg(long = "output_folder", default_value = "output")]
    pub output_folder: PathBuf,

    /// 显示调试日志
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_tool() {
        let cli = Cli::parse_from(["json2qti"]);
        assert_eq!(cli.sample_folder, PathBuf::from("xml-sample/sample-image"));
        assert_eq!(cli.output_folder, PathBuf::from("output"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::parse_from([
            "json2qti",
            "--json_file",
            "bank/exam.json",
            "--output_folder",
            "dist",
            "--verbose",
        ]);
        assert_eq!(cli.json_file, PathBuf::from("bank/exam.json"));
        assert_eq!(cli.output_folder, PathBuf::from("dist"));
        assert!(cli.verbose);
    }
}
