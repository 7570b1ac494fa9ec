use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

mod core;
mod parsers;

use crate::core::{DependencyAnalyzer, Language, MapOptions};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "depmap",
    version = "0.1.0",
    author = "depmap developers",
    about = "Multi-language dependency mapper - imports, graphs, circular chains"
)]
struct Cli {
    /// File or directory to analyze
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Language to analyze; auto dispatches per file extension
    #[arg(short, long, value_enum, default_value_t = LanguageArg::Auto)]
    language: LanguageArg,

    /// Directory traversal depth limit, -1 = unlimited
    #[arg(short, long, default_value_t = 3, allow_hyphen_values = true)]
    depth: i64,

    /// Exclude stdlib/third-party dependencies from the report
    #[arg(long)]
    no_external: bool,

    /// Output format: summary, json
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Worker threads for per-file extraction (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum LanguageArg {
    Auto,
    Python,
    Javascript,
    Typescript,
    Java,
    Go,
}

impl LanguageArg {
    fn to_filter(self) -> Option<Language> {
        match self {
            LanguageArg::Auto => None,
            LanguageArg::Python => Some(Language::Python),
            LanguageArg::Javascript => Some(Language::Javascript),
            LanguageArg::Typescript => Some(Language::Typescript),
            LanguageArg::Java => Some(Language::Java),
            LanguageArg::Go => Some(Language::Go),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Summary,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        path,
        language,
        depth,
        no_external,
        format,
        output,
        threads,
    } = cli;

    if threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let options = MapOptions {
        language: language.to_filter(),
        depth,
        include_external: !no_external,
    };

    let start = Instant::now();
    let analyzer = DependencyAnalyzer::new();
    let report = analyzer.analyze(&path, &options);
    let elapsed = start.elapsed();

    let rendered = match format {
        OutputFormat::Summary => report.render_text(),
        OutputFormat::Json => report.to_json()?,
    };

    match output {
        Some(file) => {
            fs::write(&file, rendered)?;
            println!("Report written to {}", file.display());
        }
        None => print!("{rendered}"),
    }

    eprintln!("Analysis completed in {:.2}s", elapsed.as_secs_f64());
    Ok(())
}
