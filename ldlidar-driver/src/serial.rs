use crate::error::LdLidarError;
use serialport::{DataBits, Parity, SerialPort, StopBits};
use std::io::{ErrorKind, Read};
use std::time::Duration;

/// Result of asking a byte source for one byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Byte(u8),
    /// Nothing arrived within the source's read timeout.
    Timeout,
    EndOfStream,
}

/// Supplier of the raw byte stream. Reads block for at most the timeout the
/// source was configured with.
pub trait ByteSource {
    fn read_byte(&mut self) -> Result<ReadOutcome, LdLidarError>;
}

/// Adapts any `Read` (a serial port, a capture file, a byte slice) into a
/// `ByteSource`. A zero-length read is end-of-stream.
pub struct IoByteSource<R> {
    reader: R,
}

impl<R: Read> IoByteSource<R> {
    pub fn new(reader: R) -> Self {
        IoByteSource { reader }
    }
}

impl<R: Read> ByteSource for IoByteSource<R> {
    fn read_byte(&mut self) -> Result<ReadOutcome, LdLidarError> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(ReadOutcome::EndOfStream),
                Ok(_) => return Ok(ReadOutcome::Byte(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => {
                    return Ok(ReadOutcome::Timeout)
                }
                Err(e) => return Err(LdLidarError::IoError(e)),
            }
        }
    }
}

/// Opens `port_name` as 8N1 at `baud_rate`.
pub(crate) fn open_port(
    port_name: &str,
    baud_rate: u32,
    read_timeout: Duration,
) -> Result<Box<dyn SerialPort>, LdLidarError> {
    let port = serialport::new(port_name, baud_rate)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .timeout(read_timeout)
        .open()?;
    Ok(port)
}
