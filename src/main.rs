use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use panelkit::{
    export_layout, init_logging, read_layout_json_file, Config, DirectorySink, ElementBuilder,
    ExportFormat, ExportOptions, LayoutCanvas, PayloadSink,
};

/// Export control-panel layouts to JSON, SVG, DXF and PDF
#[derive(Debug, Parser)]
#[command(name = "panelkit", version = panelkit::LONG_VERSION, about)]
struct Cli {
    /// Configuration file (.toml or .json); defaults to the platform config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Export a scene file to another format
    Export {
        /// Scene JSON file to read
        input: PathBuf,
        /// Output format: json, svg, dxf or pdf
        #[arg(short, long)]
        format: Option<String>,
        /// Base name for the output file
        #[arg(short, long)]
        name: Option<String>,
        /// Directory to write into
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Canvas width in scene units, used when the layout is empty
        #[arg(long, requires = "canvas_height")]
        canvas_width: Option<f64>,
        /// Canvas height in scene units, used when the layout is empty
        #[arg(long, requires = "canvas_width")]
        canvas_height: Option<f64>,
    },
    /// Check a scene file without exporting it
    Validate {
        /// Scene JSON file to check
        input: PathBuf,
    },
    /// Print a new element as JSON
    NewElement {
        /// Element type (button, lever, custom, ...)
        #[arg(long = "type", default_value = "button")]
        kind: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        mapping: Option<String>,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        y: f64,
        #[arg(long, requires = "height")]
        width: Option<f64>,
        #[arg(long, requires = "width")]
        height: Option<f64>,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        rotation: f64,
        /// Corner radius as a percentage (0-100)
        #[arg(long)]
        radius: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.logging.level, config.logging.json)?;
    tracing::debug!(
        version = panelkit::VERSION,
        build_date = panelkit::BUILD_DATE,
        "Starting panelkit"
    );

    match cli.command {
        Command::Export {
            input,
            format,
            name,
            out_dir,
            canvas_width,
            canvas_height,
        } => {
            let format = match format {
                Some(tag) => tag.parse::<ExportFormat>()?,
                None => config.export.default_format,
            };

            let mut canvas: LayoutCanvas = config.export.canvas;
            if let (Some(width), Some(height)) = (canvas_width, canvas_height) {
                canvas.width = width;
                canvas.height = height;
            }

            let payload = read_layout_json_file(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let snapshot = payload.into_snapshot(canvas);

            let options = ExportOptions {
                filename: Some(name.unwrap_or_else(|| config.export.default_filename.clone())),
            };
            let exported = export_layout(format, &snapshot, &options).await?;

            let sink = DirectorySink::new(out_dir.unwrap_or(config.export.output_dir));
            let path = sink.save(&exported)?;
            println!("{}", path.display());
        }
        Command::Validate { input } => {
            let payload = read_layout_json_file(&input)
                .with_context(|| format!("Invalid layout {}", input.display()))?;
            println!(
                "{}: {} element(s), units {}, grid {}",
                input.display(),
                payload.elements.len(),
                payload.settings.units,
                payload.settings.grid_size
            );
        }
        Command::NewElement {
            kind,
            name,
            mapping,
            x,
            y,
            width,
            height,
            rotation,
            radius,
        } => {
            if radius.is_some_and(|r| !r.is_finite()) {
                bail!("--radius must be a finite number");
            }

            let mut builder = ElementBuilder::new()
                .kind(kind)
                .position(x, y)
                .rotation(rotation);
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(mapping) = mapping {
                builder = builder.mapping(mapping);
            }
            if let (Some(width), Some(height)) = (width, height) {
                builder = builder.size(width, height);
            }
            if let Some(radius) = radius {
                builder = builder.radius(radius);
            }

            let element = builder.build()?;
            println!("{}", serde_json::to_string_pretty(&element)?);
        }
    }

    Ok(())
}
