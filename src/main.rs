use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tagver::version::loose::sort_tagged;
use tagver::version::semver::{latest_tag, parse_tag};
use tagver::version::types::TagRecord;

#[derive(Parser)]
#[command(name = "tagver")]
#[command(version, about = "Parse and order package release tags")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Strictly parse a tag and print its components as JSON
    Parse { tag: String },

    /// Sort version records from FILE or stdin by loose tag order
    Sort {
        file: Option<PathBuf>,

        /// Read and write newline-delimited tags instead of a JSON array
        #[arg(long)]
        lines: bool,
    },

    /// Print the latest strictly-parseable tag from FILE or stdin
    Latest {
        file: Option<PathBuf>,

        /// Read newline-delimited tags instead of a JSON array
        #[arg(long)]
        lines: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Parse { tag } => cmd_parse(&tag),
        Command::Sort { file, lines } => cmd_sort(file.as_deref(), lines),
        Command::Latest { file, lines } => cmd_latest(file.as_deref(), lines),
    }
}

fn cmd_parse(tag: &str) -> anyhow::Result<()> {
    let version = parse_tag(tag)?;
    let out = serde_json::json!({
        "major": version.major,
        "minor": version.minor,
        "patch": version.patch,
        "pre": version.pre.as_str(),
        "build": version.build.as_str(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_sort(file: Option<&Path>, lines: bool) -> anyhow::Result<()> {
    let input = read_input(file)?;

    if lines {
        let tags: Vec<String> = input.lines().map(str::to_string).collect();
        for tag in sort_tagged(tags) {
            println!("{tag}");
        }
    } else {
        let records = parse_records(&input)?;
        println!("{}", serde_json::to_string_pretty(&sort_tagged(records))?);
    }

    Ok(())
}

fn cmd_latest(file: Option<&Path>, lines: bool) -> anyhow::Result<()> {
    let input = read_input(file)?;

    let tags: Vec<String> = if lines {
        input.lines().map(str::to_string).collect()
    } else {
        parse_records(&input)?.into_iter().map(|r| r.tag).collect()
    };

    let latest = latest_tag(&tags).context("no strictly parseable tags in input")?;
    println!("{latest}");

    Ok(())
}

fn parse_records(input: &str) -> anyhow::Result<Vec<TagRecord>> {
    serde_json::from_str(input).context("input is not a JSON array of records with a \"tag\" field")
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
