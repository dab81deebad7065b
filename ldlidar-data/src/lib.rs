pub mod frame;
pub mod ldlidar_models;
pub mod scan;

pub use frame::{DecodedFrame, FrameConfig, ScanPoint};
pub use ldlidar_models::{model_baud_rate, LdlidarModel};
pub use scan::LaserScan;
