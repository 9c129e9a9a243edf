//! manualtex CLI - LaTeX assembly manual renderer

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use manualtex::render::{referenced_assets, AssetResolver, RenderResult, RenderStats};
use manualtex::{parse_file, JsonFormat, Manualtex};

#[derive(Parser)]
#[command(name = "manualtex")]
#[command(version)]
#[command(about = "Render furniture assembly data into LaTeX manuals", long_about = None)]
struct Cli {
    /// Input metadata JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output .tex file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    render: RenderArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Default)]
struct RenderArgs {
    /// Directory asset paths are checked against (defaults to the input's directory)
    #[arg(long, value_name = "DIR", env = "MANUALTEX_ASSET_ROOT")]
    asset_root: Option<PathBuf>,

    /// Prefix prepended to embedded image paths
    #[arg(long, value_name = "PREFIX")]
    image_prefix: Option<String>,

    /// Figure width as a fraction of the text width
    #[arg(long, value_name = "FRACTION")]
    image_width: Option<f32>,

    /// Emit sections only, without preamble and \end{document}
    #[arg(long)]
    body_only: bool,
}

impl RenderArgs {
    fn builder(&self) -> Manualtex {
        let mut builder = Manualtex::new();
        if let Some(ref root) = self.asset_root {
            builder = builder.with_asset_root(root);
        }
        if let Some(ref prefix) = self.image_prefix {
            builder = builder.with_image_prefix(prefix);
        }
        if let Some(width) = self.image_width {
            builder = builder.with_image_width(width);
        }
        if self.body_only {
            builder = builder.body_only();
        }
        builder
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a manual to LaTeX
    Render {
        /// Input metadata JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Validate a metadata file without rendering
    Validate {
        /// Input metadata JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show manual information and missing assets
    Info {
        /// Input metadata JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Directory asset paths are checked against (defaults to the input's directory)
        #[arg(long, value_name = "DIR", env = "MANUALTEX_ASSET_ROOT")]
        asset_root: Option<PathBuf>,
    },

    /// Print the validated document as normalized JSON
    Json {
        /// Input metadata JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            render,
        }) => cmd_render(&input, output.as_deref(), &render),
        Some(Commands::Validate { input }) => cmd_validate(&input),
        Some(Commands::Info { input, asset_root }) => cmd_info(&input, asset_root.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render next to the input if one is provided
            if let Some(input) = cli.input {
                let output = cli
                    .output
                    .unwrap_or_else(|| default_output_path(&input));
                cmd_render(&input, Some(&output), &cli.render)
            } else {
                println!("{}", "Usage: manualtex <FILE> [OUTPUT]".yellow());
                println!("       manualtex --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// `<dir>/<stem>.tex` for `<dir>/<stem>.json`, using the model directory name
/// for the conventional `metadata.json`.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let name = if stem == "metadata" {
        input
            .parent()
            .and_then(|dir| dir.file_name())
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_else(|| stem.into_owned())
    } else {
        stem.into_owned()
    };
    PathBuf::from(format!("{}.tex", name))
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    args: &RenderArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("rendering {}", input.display());
    let result = args.builder().load(input)?.to_latex_with_stats();

    if let Some(path) = output {
        fs::write(path, &result.content)?;
        println!("{} {}", "Saved to".green(), path.display());
        println!("{}", render_summary(&result).dimmed());
        if result.stats.has_placeholders() {
            println!(
                "{} {} asset(s) missing, placeholders used",
                "Warning:".yellow().bold(),
                result.stats.placeholder_count
            );
        }
    } else {
        println!("{}", result.content);
    }

    Ok(())
}

/// One-line summary of a render: sections, figures and generation time.
fn render_summary(result: &RenderResult) -> String {
    format!(
        "{} sections, {} figures, {} bytes, generated {}",
        result.stats.section_count,
        result.stats.figure_count,
        result.content_len(),
        result.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

fn cmd_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    println!(
        "{} {} ({} steps, {} parts)",
        "Valid:".green().bold(),
        input.display(),
        doc.steps().len(),
        doc.parts().len()
    );
    Ok(())
}

fn cmd_info(input: &Path, asset_root: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let root = asset_root
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    let resolver = AssetResolver::new().with_root(&root);

    println!("{}", "Manual Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), doc.title());
    println!("{}: {}", "Model".bold(), doc.model_id());
    println!("{}: {}", "Time estimate".bold(), doc.time_estimate());
    println!(
        "{}: {}",
        "Components page".bold(),
        if doc.has_parts_diagram() { "Yes" } else { "No" }
    );
    println!("{}: {}", "Steps".bold(), doc.steps().len());
    println!(
        "{}: {} ({} pieces)",
        "Parts".bold(),
        doc.parts().len(),
        doc.total_quantity()
    );

    println!();
    println!("{}", "Assets".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let mut missing = 0;
    for (slot, path) in referenced_assets(&doc) {
        let directive = resolver.resolve(slot, path);
        let status = if directive.is_available() {
            "found".green()
        } else {
            missing += 1;
            "missing".red()
        };
        println!("  {} {}: {}", status, slot, path.unwrap_or("(not set)"));
    }

    if missing > 0 {
        println!(
            "\n{} {} asset(s) will be rendered as placeholders",
            "Warning:".yellow().bold(),
            missing
        );
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = Manualtex::new().load(input)?.to_json(format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "manualtex".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("LaTeX assembly manual renderer");
    println!();
    println!("License: MIT");
}
