use mini_chart::render::SvgRenderer;
use mini_chart::{Sparkline, SparklineConfig};
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: render_sparkline (--values <v1,v2,...> | --input <series.json>) \
[--config <config.json>] [--hover <offset-x>] [--format <svg|html|snapshot>] [--output <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Svg,
    Html,
    Snapshot,
}

#[derive(Debug)]
struct CliArgs {
    values: Option<String>,
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    hover: Option<f64>,
    format: OutputFormat,
    output: Option<PathBuf>,
}

fn main() {
    let _ = mini_chart::telemetry::init_tracing_with_default("warn");
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let series = match (&args.values, &args.input) {
        (Some(values), None) => parse_values(values)?,
        (None, Some(path)) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            serde_json::from_str::<Vec<f64>>(&raw)
                .map_err(|err| format!("invalid series json: {err}"))?
        }
        _ => return Err(format!("exactly one of --values or --input is required\n{USAGE}")),
    };

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            SparklineConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => SparklineConfig::default(),
    };

    let mut sparkline = Sparkline::with_series(SvgRenderer::new(), config, series);
    if let Some(offset_x) = args.hover {
        sparkline.pointer_move(offset_x);
    }
    sparkline.render().map_err(|err| err.to_string())?;

    let payload = match args.format {
        OutputFormat::Svg => sparkline.renderer().svg().to_owned(),
        OutputFormat::Html => sparkline.renderer().html().to_owned(),
        OutputFormat::Snapshot => sparkline
            .snapshot()
            .to_json_contract_v1_pretty()
            .map_err(|err| err.to_string())?,
    };

    match &args.output {
        Some(path) => fs::write(path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{payload}");
            Ok(())
        }
    }
}

fn parse_values(raw: &str) -> Result<Vec<f64>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<f64>()
                .map_err(|err| format!("invalid value `{item}`: {err}"))
        })
        .collect()
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut cli = CliArgs {
        values: None,
        input: None,
        config: None,
        hover: None,
        format: OutputFormat::Html,
        output: None,
    };

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--values" => cli.values = Some(value("--values")?),
            "--input" => cli.input = Some(PathBuf::from(value("--input")?)),
            "--config" => cli.config = Some(PathBuf::from(value("--config")?)),
            "--output" => cli.output = Some(PathBuf::from(value("--output")?)),
            "--hover" => {
                let raw = value("--hover")?;
                let offset = raw
                    .parse::<f64>()
                    .map_err(|err| format!("invalid --hover `{raw}`: {err}"))?;
                cli.hover = Some(offset);
            }
            "--format" => {
                cli.format = match value("--format")?.as_str() {
                    "svg" => OutputFormat::Svg,
                    "html" => OutputFormat::Html,
                    "snapshot" => OutputFormat::Snapshot,
                    other => return Err(format!("unknown format `{other}`\n{USAGE}")),
                };
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    Ok(cli)
}
