use clap::Parser;
use cldraw::io::{load_gray_image, save_gray_image};
use cldraw::{visualize_etf, CldConfig, LineDrawing};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod params;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Coherent line drawing from a photograph")]
struct Cli {
    /// Input image (PNG or JPEG).
    #[arg(value_name = "INPUT", required_unless_present = "print_example")]
    input: Option<PathBuf>,
    /// Output image; the format follows the extension.
    #[arg(short, long, value_name = "FILE", default_value = "drawing.png")]
    output: PathBuf,
    /// JSON configuration file; missing fields take their defaults.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Query-style overrides, e.g. `sr=2.6&tau=0.95&di=2`.
    #[arg(short, long, value_name = "QUERY")]
    params: Option<String>,
    /// Also write a visualization of the tangent field.
    #[arg(long, value_name = "FILE")]
    etf_output: Option<PathBuf>,
    /// Seed for the tangent field visualization noise.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("cldraw=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let mut cfg = match &cli.config {
        Some(path) => serde_json::from_str::<CldConfig>(&fs::read_to_string(path)?)?,
        None => CldConfig::default(),
    };
    if let Some(query) = &cli.params {
        params::apply_query(&mut cfg, query)?;
    }

    let input = cli.input.ok_or("an input image is required")?;
    let image = load_gray_image(&input)?;
    tracing::info!(
        width = image.width(),
        height = image.height(),
        "loaded {}",
        input.display()
    );

    let drawing = LineDrawing::new(image.view(), cfg)?;
    if let Some(path) = &cli.etf_output {
        let preview = visualize_etf(drawing.etf(), cli.seed, drawing.config().parallel)?;
        save_gray_image(&preview, path)?;
    }

    let result = drawing.render()?;
    save_gray_image(&result, &cli.output)?;
    tracing::info!("wrote {}", cli.output.display());

    Ok(())
}
