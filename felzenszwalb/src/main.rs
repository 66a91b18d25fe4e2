use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use felzenszwalb::{densify, gaussian_blur, merge, region_size_histogram, segment_image, Image};
use image::RgbImage;
use rand::RngExt;

/// Segment an image using the Felzenszwalb-Huttenlocher graph-based algorithm.
#[derive(Debug, Parser)]
#[command(name = "felzenszwalb-cli", version, about)]
struct Args {
    /// Path to the input image
    #[arg(value_name = "IMAGE")]
    path: PathBuf,

    /// Region-scale parameter; larger values produce larger regions
    #[arg(short, long, default_value_t = 300.0)]
    k: f32,

    /// Apply a Gaussian pre-filter before segmenting
    #[arg(long)]
    gaussian: bool,

    /// Gaussian mask size (odd, >= 3)
    #[arg(long, default_value_t = 5)]
    mask_size: u32,

    /// Gaussian standard deviation
    #[arg(long, default_value_t = 0.8)]
    sigma: f32,

    /// Comma-separated label group to merge; may be repeated for multiple groups
    #[arg(long = "merge", value_name = "LABEL,LABEL,...")]
    merge_groups: Vec<String>,

    /// Write the region-size report to this path instead of stdout
    #[arg(long)]
    report: Option<PathBuf>,

    /// Write a label-visualization image to this path
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let decoded = image::open(&args.path)?.to_rgb8();
    let (width, height) = decoded.dimensions();
    let image = Image::from_rgb8(width, height, decoded.into_raw())?;

    let image = if args.gaussian {
        gaussian_blur(&image, args.mask_size, args.sigma)?
    } else {
        image
    };

    let mut labels = segment_image(&image, args.k)?;

    for group in &args.merge_groups {
        let selected: Vec<u32> = group
            .split(',')
            .map(|s| s.trim().parse::<u32>())
            .collect::<Result<_, _>>()?;
        merge(&mut labels, &selected);
    }

    let histogram = region_size_histogram(&labels);
    let mut report = String::new();
    report.push_str(&format!("{}\n", histogram.len()));
    for (_, count) in &histogram {
        report.push_str(&format!("{count}\n"));
    }

    match &args.report {
        Some(path) => fs::write(path, report)?,
        None => std::io::stdout().write_all(report.as_bytes())?,
    }

    if let Some(out_path) = &args.out {
        let dense = densify(&labels);
        let region_count = dense.iter().max().map(|&m| m + 1).unwrap_or(0);

        let mut rng = rand::rng();
        let palette: Vec<[u8; 3]> = (0..region_count)
            .map(|_| [rng.random(), rng.random(), rng.random()])
            .collect();

        let mut out_image = RgbImage::new(width, height);
        for (i, pixel) in out_image.pixels_mut().enumerate() {
            let color = palette[dense[i] as usize];
            *pixel = image::Rgb(color);
        }
        out_image.save(out_path)?;
    }

    Ok(())
}
