#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One normalized angular scan, assembled from a single frame.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LaserScan {
    /// Start angle of the frame in radian.
    pub angle_min: f64,
    /// End angle of the frame in radian, as reported (not unwrapped).
    pub angle_max: f64,
    /// Angular distance between samples in radian.
    pub angle_increment: f64,
    /// Distance to an object in meters.
    pub ranges: Vec<f64>,
    /// Return strength of the laser pulse, aligned with `ranges`.
    pub intensities: Vec<u8>,
    pub range_min: f64,
    pub range_max: f64,
    /// Rotational speed reported by the sensor.
    pub speed: u16,
    /// Sensor timestamp of the frame.
    pub timestamp: u16,
}
