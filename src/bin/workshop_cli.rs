//! Analyse a text file (or stdin) from the terminal.
//!
//! Usage: workshop-cli [--window N] [--json] [--sample] [PATH]

use std::io::Read;
use std::sync::Arc;

use anyhow::{bail, Context};
use text_workshop::{
    engine::Analyzer, render::text_summary, sample::SAMPLE_TEXT, WindowSize,
};

struct Args {
    window: Option<usize>,
    json: bool,
    sample: bool,
    path: Option<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        window: None,
        json: false,
        sample: false,
        path: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--window" => {
                let v = it.next().context("--window needs a value")?;
                args.window = Some(v.parse().with_context(|| format!("bad --window {v:?}"))?);
            }
            "--json" => args.json = true,
            "--sample" => args.sample = true,
            "-h" | "--help" => {
                println!("usage: workshop-cli [--window N] [--json] [--sample] [PATH]");
                std::process::exit(0);
            }
            other if other.starts_with("--") => bail!("unknown flag {other}"),
            other => args.path = Some(other.to_string()),
        }
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = parse_args()?;
    let (cfg, resources) = text_workshop::bootstrap()?;

    let text = if args.sample {
        SAMPLE_TEXT.to_string()
    } else if let Some(p) = &args.path {
        std::fs::read_to_string(p).with_context(|| format!("reading {p}"))?
    } else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    };

    let analysis = match args.window {
        Some(n) => cfg.analysis.with_window_size(WindowSize::new(n)?),
        None => cfg.analysis.clone(),
    };

    let report = Analyzer::with_resources(Arc::clone(&resources)).analyze(&text, &analysis);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", text_summary(&report));
    }
    Ok(())
}
