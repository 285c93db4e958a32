use anyhow::{Context as _, Error, anyhow};
use env_logger::{Builder, Env};
use hit_area::{HitAreaConfig, mount_directives};
use log::info;
use std::env;
use std::fs;
use std::io::{self, Write as _};
use std::path::PathBuf;

const USAGE: &str = "usage: hit_area <input.html> [--config <config.json>] [--compact]";

struct CliArgs {
    input: PathBuf,
    config: Option<PathBuf>,
    compact: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, Error> {
    let mut input = None;
    let mut config = None;
    let mut compact = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or_else(|| anyhow!("--config needs a path\n{USAGE}"))?;
                config = Some(PathBuf::from(path));
            }
            "--compact" => compact = true,
            other if other.starts_with("--") => return Err(anyhow!("Unknown flag {other}\n{USAGE}")),
            other => {
                if input.replace(PathBuf::from(other)).is_some() {
                    return Err(anyhow!("Only one input file is accepted\n{USAGE}"));
                }
            }
        }
    }
    Ok(CliArgs {
        input: input.ok_or_else(|| anyhow!(USAGE))?,
        config,
        compact,
    })
}

fn run(args: &CliArgs) -> Result<(), Error> {
    let config = match &args.config {
        Some(path) => HitAreaConfig::load(path)?,
        None => HitAreaConfig::default(),
    };
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let mut dom = html::parse_document(&source)?;
    let handles = mount_directives(&mut dom, &config)?;
    info!(
        "Attached {} hit area overlays in {}",
        handles.len(),
        args.input.display()
    );

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", dom.to_json_string(!args.compact))?;
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<(), Error> {
    Builder::from_env(Env::default().filter_or("RUST_LOG", "warn")).init();
    let args = parse_args(env::args().skip(1))?;
    run(&args)
}
