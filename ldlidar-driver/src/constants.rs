pub(crate) const LIDAR_SYNC_BYTE: u8 = 0x54;
pub(crate) const MIN_FRAME_LENGTH: usize = 14;
// Offset of the first distance sample
pub(crate) const POINTS_OFFSET: usize = 6;
// Bytes after the last sample stride that are never read as samples
pub(crate) const POINTS_TAIL_SIZE: usize = 8;
pub(crate) const POINT_STRIDE: usize = 3;
// Offset of the intensity byte from the start of a stride
pub(crate) const INTENSITY_OFFSET: usize = 3;
// Hundredths of a degree in a full turn
pub(crate) const FULL_TURN_CENTIDEGREES: u32 = 36000;
pub(crate) const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;
pub(crate) const SCAN_CHANNEL_CAPACITY: usize = 10;
