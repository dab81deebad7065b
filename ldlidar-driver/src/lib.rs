use std::sync::mpsc;
use std::time::Duration;

mod constants;
mod crc;
mod driver_threads;
mod error;
mod numeric;
mod packet;
mod pipeline;
mod scan;
mod serial;
mod synchronizer;
#[cfg(test)]
mod test_frames;

use crate::constants::{
    DEFAULT_READ_TIMEOUT_MS, LIDAR_SYNC_BYTE, MIN_FRAME_LENGTH, SCAN_CHANNEL_CAPACITY,
};
use crate::driver_threads::run_pipeline;
use crate::serial::open_port;
use crossbeam_channel::bounded;
use ldlidar_data::{model_baud_rate, FrameConfig, LaserScan, LdlidarModel};
use tracing::info;

pub use crate::crc::validate_frame;
pub use crate::driver_threads::{join, DriverThread};
pub use crate::error::LdLidarError;
pub use crate::packet::decode_frame;
pub use crate::pipeline::{Pipeline, PipelineStats, ScanSink};
pub use crate::scan::assemble_scan;
pub use crate::serial::{ByteSource, IoByteSource, ReadOutcome};
pub use crate::synchronizer::{FrameSynchronizer, SyncEvent};

/// Settings of a driver instance.
#[derive(Clone, Debug, PartialEq)]
pub struct DriverConfig {
    pub model: LdlidarModel,
    /// How long a single read may block before the driver checks for shutdown.
    pub read_timeout: Duration,
    pub frame: FrameConfig,
    /// Scans buffered for the receiver. Newer scans are dropped while it is full.
    pub scan_channel_capacity: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            model: LdlidarModel::default(),
            read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
            frame: FrameConfig {
                sync_byte: LIDAR_SYNC_BYTE,
                min_frame_length: MIN_FRAME_LENGTH,
            },
            scan_channel_capacity: SCAN_CHANNEL_CAPACITY,
        }
    }
}

impl DriverConfig {
    pub fn for_model(model: LdlidarModel) -> DriverConfig {
        DriverConfig {
            model,
            ..DriverConfig::default()
        }
    }
}

/// Function to launch the LiDAR with the default settings of `model`.
/// # Arguments
///
/// * `port_name` - Serial port name such as `/dev/ttyUSB0`.
/// * `model` - Model
pub fn run_driver(
    port_name: &str,
    model: LdlidarModel,
) -> Result<(DriverThread, mpsc::Receiver<LaserScan>), LdLidarError> {
    run_driver_with_config(port_name, &DriverConfig::for_model(model))
}

/// Opens the port and spawns the thread that turns its byte stream into scans.
/// The port is closed when the thread ends, either on drop of the returned
/// `DriverThread` or when the port reports an error.
pub fn run_driver_with_config(
    port_name: &str,
    config: &DriverConfig,
) -> Result<(DriverThread, mpsc::Receiver<LaserScan>), LdLidarError> {
    let baud_rate = model_baud_rate(config.model);
    let port = open_port(port_name, baud_rate, config.read_timeout)?;
    info!(port_name, baud_rate, model = ?config.model, "driver started");

    let (terminator_tx, terminator_rx) = bounded(10);
    let (scan_tx, scan_rx) = mpsc::sync_channel::<LaserScan>(config.scan_channel_capacity);

    let pipeline = Pipeline::new(IoByteSource::new(port), scan_tx, config.frame);
    let thread = Some(std::thread::spawn(move || {
        run_pipeline(pipeline, terminator_rx);
    }));

    let driver_thread = DriverThread {
        terminator_tx,
        thread,
    };

    Ok((driver_thread, scan_rx))
}
