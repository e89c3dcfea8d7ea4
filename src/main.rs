use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod report;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <screenshot.png> [data_dir] [player_class]", args[0]);
        std::process::exit(1);
    }

    let image_path = PathBuf::from(&args[1]);
    let data_dir = match args.get(2) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(format!("{}/assets", env!("CARGO_MANIFEST_DIR"))),
    };
    let player_class = args.get(3).map(String::as_str);

    let files = report::DataFiles::in_dir(&data_dir);
    let mut detector = report::load_detector(&files)?;
    let report = report::analyze_screenshot(&mut detector, &image_path, player_class)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
