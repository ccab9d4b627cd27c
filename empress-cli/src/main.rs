use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use empress_common::groups::group_by_color;
use empress_common::types::{Color, ColorSpec};
use empress_dom::container::Container;
use empress_legend::config::LegendConfig;
use empress_legend::legend::Legend;
use indexmap::IndexMap;
use log::{error, info};
use serde::Deserialize;

const DEFAULT_CONTAINER_ID: &str = "legend-main";

/// Render tree viewer legends to HTML
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a categorical legend from a JSON object of label -> CSS color
    Categorical {
        /// Legend title
        #[arg(short, long)]
        title: String,

        /// JSON file with the label -> color mapping
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render a continuous legend around a pre-rendered gradient SVG fragment
    Continuous {
        /// Legend title
        #[arg(short, long)]
        title: String,

        /// File holding the gradient SVG fragment
        #[arg(short, long)]
        svg: PathBuf,

        /// Show the warning about values left out of the gradient
        #[arg(long)]
        non_numeric: bool,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Group selected samples by color, printing color -> sample names as JSON
    Groups {
        /// JSON array of {"name": ..., "color": ...} objects
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(clap::Args)]
struct RenderArgs {
    /// JSON file overriding the legend's class names and styling
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the HTML (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// id of the container element
    #[arg(long, default_value = DEFAULT_CONTAINER_ID)]
    container_id: String,
}

#[derive(Deserialize)]
struct SelectedSample {
    name: String,
    color: Color,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        error!("{err:#}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Categorical {
            title,
            input,
            render,
        } => {
            let text = read_to_string(&input)?;
            let color_info: IndexMap<String, ColorSpec> = serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse color mapping in {}", input.display()))?;

            let mut legend = make_legend(&render)?;
            legend.add_categorical_key(&title, color_info)?;
            write_html(&legend, render.output.as_deref())
        }
        Commands::Continuous {
            title,
            svg,
            non_numeric,
            render,
        } => {
            let gradient_svg = read_to_string(&svg)?;
            let mut legend = make_legend(&render)?;
            legend.add_continuous_key(&title, gradient_svg.trim(), non_numeric);
            write_html(&legend, render.output.as_deref())
        }
        Commands::Groups { input } => {
            let text = read_to_string(&input)?;
            let samples: Vec<SelectedSample> = serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse samples in {}", input.display()))?;
            let groups = group_by_color(samples.into_iter().map(|s| (s.name, s.color)));
            println!("{}", serde_json::to_string_pretty(&groups)?);
            Ok(())
        }
    }
}

fn make_legend(args: &RenderArgs) -> Result<Legend> {
    let config = match &args.config {
        Some(path) => {
            let text = read_to_string(path)?;
            serde_json::from_str::<LegendConfig>(&text)
                .with_context(|| format!("Failed to parse legend config {}", path.display()))?
        }
        None => LegendConfig::default(),
    };
    Ok(Legend::with_config(
        Container::with_id(&args.container_id),
        config,
    ))
}

fn write_html(legend: &Legend, output: Option<&Path>) -> Result<()> {
    let html = legend.to_html();
    match output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote legend to {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
