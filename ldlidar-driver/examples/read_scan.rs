use clap::{Parser, ValueEnum};
use ldlidar_data::LdlidarModel;
use ldlidar_driver::{run_driver_with_config, DriverConfig};
use std::io::Write;
use std::time::Duration;
use tracing::Level;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Model {
    Ld06,
    Ld19,
}

impl From<Model> for LdlidarModel {
    fn from(model: Model) -> Self {
        match model {
            Model::Ld06 => LdlidarModel::Ld06,
            Model::Ld19 => LdlidarModel::Ld19,
        }
    }
}

/// Reads scans from the LiDAR and prints them as JSON lines.
#[derive(Parser, Debug)]
#[command(about = "LiDAR data receiver.", disable_version_flag = true)]
struct Args {
    /// The device path to a serial port
    port: String,
    #[arg(long, value_enum, default_value = "ld06")]
    model: Model,
    /// Serial read timeout in milliseconds
    #[arg(long, default_value_t = 1000)]
    timeout_ms: u64,
    /// Stop after this many scans
    #[arg(long)]
    count: Option<usize>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = DriverConfig {
        read_timeout: Duration::from_millis(args.timeout_ms),
        ..DriverConfig::for_model(args.model.into())
    };
    let (driver_thread, scan_rx) = match run_driver_with_config(&args.port, &config) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("Failed to open \"{}\". Error: {}", args.port, e);
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for scan in scan_rx.iter().take(args.count.unwrap_or(usize::MAX)) {
        let line = serde_json::to_string(&scan).unwrap();
        if writeln!(out, "{line}").is_err() {
            break;
        }
    }

    drop(driver_thread);
}
