use hough_lines::config::load_config;
use hough_lines::draw_lines;
use hough_lines::image::io::{
    load_rgba_image, save_edge_mask, save_hough_space, save_rgba_image, write_json_file,
};
use hough_lines::HoughTransform;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut image = load_rgba_image(&config.input)?;
    let hough =
        HoughTransform::with_brightness(&image, config.hough.params(), config.hough.brightness);
    let report = hough.report(config.hough.threshold);
    let lines: Vec<_> = report.lines.iter().map(|s| s.line).collect();

    draw_lines(&mut image, &lines, config.draw.color);
    save_rgba_image(&image, &config.output.image)?;
    write_json_file(&config.output.lines_json, &report)?;

    if let Some(path) = &config.output.edges_image {
        save_edge_mask(hough.edges(), path)?;
        println!("Saved edge mask to {}", path.display());
    }
    if let Some(path) = &config.output.hough_space_image {
        save_hough_space(hough.accumulator(), path)?;
        println!("Saved Hough space to {}", path.display());
    }

    println!(
        "Detected {} lines (threshold {}, peak {} votes) in {:.2} ms",
        report.line_count, report.threshold, report.peak_votes, report.timing.total_ms
    );
    println!(
        "Saved annotated image to {} and report to {}",
        config.output.image.display(),
        config.output.lines_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: hough_demo <config.json>".to_string()
}
