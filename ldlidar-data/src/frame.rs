#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Framing parameters of the byte stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameConfig {
    /// Marker byte that starts a frame and implicitly terminates the previous one.
    pub sync_byte: u8,
    /// Candidates shorter than this are dropped.
    pub min_frame_length: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        FrameConfig {
            sync_byte: 0x54,
            min_frame_length: 14,
        }
    }
}

/// A single distance sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanPoint {
    /// Distance in millimeters.
    pub distance: u16,
    pub intensity: u8,
}

/// Fields of a checksum-verified frame.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodedFrame {
    pub header: u8,
    /// Version/length byte. Captured but never checked.
    pub verlen: u8,
    pub speed: u16,
    /// Hundredths of a degree, 0..36000.
    pub start_angle: u16,
    /// Hundredths of a degree, 0..36000.
    pub end_angle: u16,
    pub timestamp: u16,
    pub crc: u8,
    pub points: Vec<ScanPoint>,
}
