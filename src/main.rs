use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use offset_crops::{shallow_listing, GeneratorConfig, OffsetCropGenerator};

#[derive(Parser, Debug)]
#[command(author, version, about = "Write 40 offset crops of every 512x512 image in a folder tree")]
struct Args {
    /// Input folder (searched recursively for jpg/jpeg/png/bmp/tiff/tif)
    #[arg(short, long)]
    input: PathBuf,

    /// Output base directory for the Offset-<direction>-<step> trees
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GeneratorConfig::new(&args.input, &args.output);
    let generator = OffsetCropGenerator::new(config);
    let stats = generator
        .run()
        .with_context(|| format!("Failed to generate offset crops for {}", args.input.display()))?;

    println!();
    println!("Images seen:    {}", stats.total_images_seen);
    println!("Crops written:  {}", stats.total_crops_written);
    if stats.skipped_images() > 0 {
        println!(
            "Skipped images: {} ({} undecodable, {} not 512x512)",
            stats.skipped_images(),
            stats.decode_failures,
            stats.dimension_mismatches
        );
    }
    if stats.write_failures > 0 {
        println!("Failed writes:  {}", stats.write_failures);
    }
    let output_base = &generator.config().output_base_dir;
    println!("Output:         {}", output_base.display());

    println!();
    println!("Output layout:");
    for line in shallow_listing(output_base) {
        println!("{line}");
    }

    Ok(())
}
