use crate::constants::{
    INTENSITY_OFFSET, MIN_FRAME_LENGTH, POINTS_OFFSET, POINTS_TAIL_SIZE, POINT_STRIDE,
};
use crate::error::LdLidarError;
use crate::numeric::to_u16_le;
use ldlidar_data::{DecodedFrame, FrameConfig, ScanPoint};

/// Splits a checksum-verified frame into its fields.
///
/// Fixed fields sit at the head (`header`, `verlen`, `speed`, `start_angle`)
/// and tail (`end_angle`, `timestamp`, `crc`) of the frame; the samples in
/// between are read as 3-byte strides. The intensity of a sample is taken from
/// the byte three past the stride start, which is the low distance byte of the
/// following stride.
///
/// The configured minimum length is never taken below the size of the fixed
/// fields.
pub fn decode_frame(packet: &[u8], config: &FrameConfig) -> Result<DecodedFrame, LdLidarError> {
    let n = packet.len();
    let min_frame_length = config.min_frame_length.max(MIN_FRAME_LENGTH);
    if n < min_frame_length {
        return Err(LdLidarError::InvalidFrameLength(min_frame_length, n));
    }
    if packet[0] != config.sync_byte {
        return Err(LdLidarError::InvalidHeader {
            expected: config.sync_byte,
            actual: packet[0],
        });
    }

    let points = scan_indices(n)
        .map(|i| ScanPoint {
            distance: to_u16_le(packet[i], packet[i + 1]),
            intensity: packet[i + INTENSITY_OFFSET],
        })
        .collect();

    Ok(DecodedFrame {
        header: packet[0],
        verlen: packet[1],
        speed: to_u16_le(packet[2], packet[3]),
        start_angle: to_u16_le(packet[4], packet[5]),
        end_angle: to_u16_le(packet[n - 5], packet[n - 4]),
        timestamp: to_u16_le(packet[n - 3], packet[n - 2]),
        crc: packet[n - 1],
        points,
    })
}

fn scan_indices(packet_len: usize) -> impl Iterator<Item = usize> {
    (POINTS_OFFSET..packet_len - POINTS_TAIL_SIZE).step_by(POINT_STRIDE)
}
