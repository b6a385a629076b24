use hough_lines::image::{ImageRgba8, BLACK, RED};
use hough_lines::{draw_lines, HoughTransform};
use std::time::Instant;

fn main() {
    env_logger::init();

    // Demo stub: a white canvas with one dark horizontal line at y = 10
    let w = 60usize;
    let h = 40usize;
    let mut img = ImageRgba8::new(w, h);
    for x in 0..w {
        img.set(x, 10, BLACK);
    }

    let t0 = Instant::now();
    let hough = HoughTransform::new(&img);
    let lines = hough.find_lines(50);
    let latency = t0.elapsed().as_secs_f64() * 1000.0;

    draw_lines(&mut img, &lines, RED);
    for line in &lines {
        println!("radius={} theta_deg={:.1}", line.radius, line.theta_deg());
    }
    println!("lines={} latency_ms={:.3}", lines.len(), latency);
}
