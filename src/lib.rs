//! Linkmap: hotspot areas over a page background.
//!
//! A linkmap page shows a background image with rectangular areas that link
//! to other pages or audio files and light up with hover or visited images,
//! optionally cut out of a pre-rendered masked image. This crate holds the
//! parts of that feature with real logic in them: turning drag and resize
//! gestures into stored percentage geometry, and resolving stored areas
//! into the attributes the page markup needs.
//!
//! # Modules
//!
//! - [`model`]: Areas, page configuration, coordinate types
//! - [`interaction`]: Drag/resize gestures and committed-change events
//! - [`marker`]: Marker toggle and hover highlight
//! - [`resolve`]: Area resolution into presentation attributes
//! - [`render`]: Markup, editor overlay state and sidebar entries
//! - [`references`]: File lookups with dangling references
//! - [`site`]: External sites with autosave
//! - [`validation`]: Configuration validation and error reporting
//! - [`error`]: Error types for linkmap operations

pub mod error;
pub mod interaction;
pub mod marker;
pub mod model;
pub mod references;
pub mod render;
pub mod resolve;
pub mod site;
pub mod validation;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

pub use error::LinkmapError;

use interaction::{AreaEditor, CommitOutcome, ResizeHandle};
use model::{Configuration, ContainerSize, Position};

/// The linkmap CLI application.
#[derive(Parser)]
#[command(name = "linkmap")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Validate a page configuration for errors and warnings.
    Validate(ValidateArgs),
    /// Print the presentation attributes of every area.
    Resolve(ResolveArgs),
    /// Print the published-page markup of all areas.
    Render(InputArgs),
    /// Drag or resize one area as if done in the editor.
    Edit(EditArgs),
    /// Toggle the marker of one area.
    ToggleMarker(ToggleMarkerArgs),
}

/// Input file options shared by all subcommands.
#[derive(clap::Args)]
struct InputArgs {
    /// Page configuration file.
    input: PathBuf,

    /// Input format ('json' or 'yaml').
    #[arg(long, default_value = "json")]
    format: String,
}

/// Arguments for the validate subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the resolve subcommand.
#[derive(clap::Args)]
struct ResolveArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output format ('text', 'json' or 'csv').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the edit subcommand.
#[derive(clap::Args)]
struct EditArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Ordinal index of the area.
    #[arg(long)]
    area: usize,

    /// Rendered container size in pixels, as WIDTHxHEIGHT.
    #[arg(long, value_parser = parse_container)]
    container: ContainerSize,

    /// Resize from this grip (n, e, s, w, ne, se, sw, nw) instead of dragging.
    #[arg(long)]
    handle: Option<ResizeHandle>,

    /// Pointer movement in pixels, as DX,DY.
    #[arg(long, value_parser = parse_delta, allow_hyphen_values = true)]
    by: (f64, f64),

    /// Write the updated configuration here instead of printing it.
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Arguments for the toggle-marker subcommand.
#[derive(clap::Args)]
struct ToggleMarkerArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Ordinal index of the area.
    #[arg(long)]
    area: usize,

    /// Write the updated configuration here instead of printing it.
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Run the linkmap CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), LinkmapError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Validate(args)) => run_validate(args),
        Some(Commands::Resolve(args)) => run_resolve(args),
        Some(Commands::Render(args)) => run_render(args),
        Some(Commands::Edit(args)) => run_edit(args),
        Some(Commands::ToggleMarker(args)) => run_toggle_marker(args),
        None => {
            println!("linkmap {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Hotspot areas for linkmap pages.");
            println!();
            println!("Run 'linkmap --help' for usage information.");
            Ok(())
        }
    }
}

/// Loads the configuration in the requested format.
fn load_configuration(args: &InputArgs) -> Result<Configuration, LinkmapError> {
    let config = match args.format.as_str() {
        "json" => model::io_json::read_config_json(&args.input)?,
        "yaml" | "yml" => model::io_json::read_config_yaml(&args.input)?,
        other => {
            return Err(LinkmapError::UnsupportedFormat(format!(
                "'{}' (supported: json, yaml)",
                other
            )));
        }
    };
    tracing::debug!(
        path = %args.input.display(),
        areas = config.areas.len(),
        "configuration loaded"
    );
    Ok(config)
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), LinkmapError> {
    let config = load_configuration(&args.input)?;

    let opts = validation::ValidateOptions {
        strict: args.strict,
    };
    let report = validation::validate_configuration(&config, &opts);

    match args.output.as_str() {
        "json" => {
            let json =
                serde_json::to_string_pretty(&report.to_json()).map_err(LinkmapError::JsonOutput)?;
            println!("{}", json);
        }
        _ => print!("{}", report),
    }

    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (args.strict && has_warnings) {
        Err(LinkmapError::ValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}

/// Columns of the CSV resolve output, after the index column.
const CSV_COLUMNS: [&str; 10] = [
    resolve::attributes::LEFT,
    resolve::attributes::TOP,
    resolve::attributes::WIDTH,
    resolve::attributes::HEIGHT,
    resolve::attributes::DATA_TARGET_ID,
    resolve::attributes::DATA_PAGE_TRANSITION,
    resolve::attributes::DATA_AUDIO_FILE,
    resolve::attributes::DATA_COLOR_MAP_COMPONENT_ID,
    resolve::attributes::HOVER_IMAGE_CLASS,
    resolve::attributes::VISITED_IMAGE_CLASS,
];

/// Execute the resolve subcommand.
fn run_resolve(args: ResolveArgs) -> Result<(), LinkmapError> {
    let config = load_configuration(&args.input)?;
    let resolved = resolve::resolve_areas(&config);

    match args.output.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&resolved).map_err(LinkmapError::JsonOutput)?;
            println!("{}", json);
        }
        "csv" => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            let mut header = vec!["index"];
            header.extend(CSV_COLUMNS);
            writer.write_record(&header)?;

            for (index, attrs) in resolved.iter().enumerate() {
                let mut record = vec![index.to_string()];
                record.extend(
                    CSV_COLUMNS
                        .iter()
                        .map(|name| attrs.get(name).unwrap_or_default().to_string()),
                );
                writer.write_record(&record)?;
            }
            writer.flush()?;
        }
        "text" => {
            for (index, attrs) in resolved.iter().enumerate() {
                println!("area {}:", index);
                for (name, value) in attrs.iter() {
                    println!("  {} = {}", name, value);
                }
            }
        }
        other => {
            return Err(LinkmapError::UnsupportedFormat(format!(
                "'{}' (supported: text, json, csv)",
                other
            )));
        }
    }

    Ok(())
}

/// Execute the render subcommand.
fn run_render(args: InputArgs) -> Result<(), LinkmapError> {
    let config = load_configuration(&args)?;
    print!("{}", render::render_areas_div(&config));
    Ok(())
}

/// Execute the edit subcommand.
fn run_edit(args: EditArgs) -> Result<(), LinkmapError> {
    let mut config = load_configuration(&args.input)?;
    let mut editor = AreaEditor::for_configuration(&config);

    let Some(area) = config.areas.get(args.area) else {
        return Err(LinkmapError::AreaNotFound {
            index: args.area,
            count: config.areas.len(),
        });
    };
    let start = area.rect().to_pixel(args.container);
    let grab = start.origin;

    let started = match args.handle {
        Some(handle) => editor.begin_resize(args.area, handle, start, grab),
        None => editor.begin_drag(args.area, start, grab),
    };
    if !started {
        return Err(LinkmapError::AreasNotEditable);
    }

    let (dx, dy) = args.by;
    editor.pointer_moved(Position::new(grab.left + dx, grab.top + dy));

    match editor.stop(&mut config.areas, args.container) {
        CommitOutcome::Committed { index, rect } => {
            eprintln!("Area {} committed: {:?}", index, rect);
        }
        CommitOutcome::DegenerateContainer { .. } => {
            eprintln!("Container has no size; area left unchanged");
        }
        other => tracing::warn!(?other, "gesture did not commit"),
    }

    finish(&config, args.out.as_deref())
}

/// Execute the toggle-marker subcommand.
fn run_toggle_marker(args: ToggleMarkerArgs) -> Result<(), LinkmapError> {
    let mut config = load_configuration(&args.input)?;

    let count = config.areas.len();
    let area = config
        .areas
        .get_mut(args.area)
        .ok_or(LinkmapError::AreaNotFound {
            index: args.area,
            count,
        })?;
    area.toggle_marker();
    eprintln!("Area {} marker: {}", args.area, area.marker);

    finish(&config, args.out.as_deref())
}

/// Writes the configuration to `out`, or prints it when no path is given.
fn finish(config: &Configuration, out: Option<&Path>) -> Result<(), LinkmapError> {
    match out {
        Some(path) => model::io_json::write_config_json(path, config),
        None => {
            let json = model::io_json::to_json_string(config).map_err(LinkmapError::JsonOutput)?;
            println!("{}", json);
            Ok(())
        }
    }
}

fn parse_container(value: &str) -> Result<ContainerSize, String> {
    let (width, height) = value
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", value))?;
    Ok(ContainerSize::new(
        parse_number(width)?,
        parse_number(height)?,
    ))
}

fn parse_delta(value: &str) -> Result<(f64, f64), String> {
    let (dx, dy) = value
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY, got '{}'", value))?;
    Ok((parse_number(dx)?, parse_number(dy)?))
}

fn parse_number(value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", value))
}
