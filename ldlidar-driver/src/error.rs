use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LdLidarError {
    #[error("Frame must be at least {0} bytes. Actually {1} bytes.")]
    InvalidFrameLength(usize, usize),
    #[error("Frame header must be {expected:#04X}. Observed = {actual:#04X}.")]
    InvalidHeader { expected: u8, actual: u8 },
    #[error("Checksum mismatched. Calculated = {1:02X}, expected = {0:02X}.")]
    ChecksumMismatch(u8, u8),
    #[error("Frame carries no distance samples")]
    EmptyFrame,
    #[error("Scan receiver was dropped")]
    ChannelClosed,
    #[error("Scan receiver is not keeping up")]
    ChannelFull,
    #[error(transparent)]
    SerialError(#[from] serialport::Error),
    #[error(transparent)]
    IoError(#[from] io::Error),
}
