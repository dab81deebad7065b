use clap::Parser;
use ldlidar_data::{FrameConfig, LaserScan};
use ldlidar_driver::{IoByteSource, Pipeline};
use std::fs::File;
use std::io::BufReader;
use tracing::Level;

/// Decodes a raw byte capture of the LiDAR serial stream.
#[derive(Parser, Debug)]
#[command(about = "Replays a captured LiDAR byte stream.", disable_version_flag = true)]
struct Args {
    /// File holding the raw serial bytes
    capture: String,
    /// Print every decoded scan as a JSON line
    #[arg(long)]
    print_scans: bool,
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let file = match File::open(&args.capture) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open \"{}\". Error: {}", args.capture, e);
            std::process::exit(1);
        }
    };

    let source = IoByteSource::new(BufReader::new(file));
    let mut pipeline = Pipeline::new(source, Vec::<LaserScan>::new(), FrameConfig::default());
    let stats = match pipeline.run_to_end() {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Failed to read \"{}\". Error: {}", args.capture, e);
            std::process::exit(1);
        }
    };

    if args.print_scans {
        for scan in pipeline.into_sink() {
            println!("{}", serde_json::to_string(&scan).unwrap());
        }
    }
    println!("{}", serde_json::to_string_pretty(&serde_json::json!({
        "frames": stats.n_frames,
        "discarded": stats.n_discarded,
        "checksum_errors": stats.n_checksum_errors,
        "decode_errors": stats.n_decode_errors,
        "empty_frames": stats.n_empty_frames,
        "published": stats.n_published,
    })).unwrap());
}
