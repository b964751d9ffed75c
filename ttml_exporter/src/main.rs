use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use ttml_db_core::{TtmlExportOptions, lines_from_json};
use ttml_exporter::export_ttml;

/// 将 TTML 解析器输出的歌词行（JSON 数组）导出为 TTML 文件
#[derive(Debug, Parser)]
#[command(name = "ttml-export", version, about)]
struct Cli {
    /// 输入的 JSON 文件，省略时从标准输入读取
    input: Option<PathBuf>,

    /// 输出文件，省略时写入标准输出
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 输出格式化的 TTML
    #[arg(long)]
    pretty: bool,

    /// TOML 格式的导出配置文件
    #[arg(long)]
    config: Option<PathBuf>,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    // 重复初始化时保留已有的订阅者
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn load_options(cli: &Cli) -> Result<TtmlExportOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("无法读取配置文件 {}", path.display()))?;
            TtmlExportOptions::from_toml_str(&content)
                .with_context(|| format!("配置文件 {} 无效", path.display()))?
        }
        None => TtmlExportOptions::default(),
    };

    if cli.pretty {
        options.pretty = true;
    }
    Ok(options)
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("无法读取输入文件 {}", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("无法从标准输入读取")?;
            Ok(content)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = load_options(&cli)?;
    let content = read_input(cli.input.as_ref())?;
    let lines = lines_from_json(&content)?;
    info!("读取到 {} 行歌词", lines.len());

    let ttml = export_ttml(&lines, &options)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &ttml).with_context(|| format!("无法写入 {}", path.display()))?;
            info!("已写入 {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(ttml.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["ttml-export", "in.json", "-o", "out.ttml", "--pretty"])
            .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("in.json")));
        assert_eq!(cli.output, Some(PathBuf::from("out.ttml")));
        assert!(cli.pretty);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_pretty_flag_overrides_defaults() {
        let cli = Cli::try_parse_from(["ttml-export", "--pretty"]).unwrap();
        let options = load_options(&cli).unwrap();
        assert!(options.pretty);
        assert_eq!(options.indent_size, 2);
    }
}
