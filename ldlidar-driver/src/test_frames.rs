// Captured-style frames shared by the unit tests. None of them carries 0x54
// past the header byte.

// start 35900, end 100, three strides on the wire, two decoded samples
pub(crate) const WRAPPED_FRAME: [u8; 20] = [
    0x54, 0x23, 0x10, 0x0E, 0x3C, 0x8C, 0xE8, 0x03, 0xC8, 0xDC, 0x05, 0x96, 0xD0, 0x07, 0x64, 0x64,
    0x00, 0x39, 0x30, 0x0D,
];

// Minimum-length frame, one stride on the wire, no decoded sample
pub(crate) const EMPTY_FRAME: [u8; 14] = [
    0x54, 0x21, 0x10, 0x0E, 0x28, 0x23, 0xF4, 0x01, 0x0A, 0x28, 0x23, 0x09, 0x03, 0x81,
];

// Full 47-byte frame: start 1000, end 2100, twelve strides of 100mm + 50mm * k
pub(crate) const FULL_FRAME: [u8; 47] = [
    0x54, 0x2C, 0x10, 0x0E, 0xE8, 0x03, 0x64, 0x00, 0x1E, 0x96, 0x00, 0x1F, 0xC8, 0x00, 0x20, 0xFA,
    0x00, 0x21, 0x2C, 0x01, 0x22, 0x5E, 0x01, 0x23, 0x90, 0x01, 0x24, 0xC2, 0x01, 0x25, 0xF4, 0x01,
    0x26, 0x26, 0x02, 0x27, 0x58, 0x02, 0x28, 0x8A, 0x02, 0x29, 0x34, 0x08, 0xD0, 0x07, 0xFC,
];

// start 4500, end 5000, speed 2500, timestamp 3000, five strides on the wire
pub(crate) const SHORT_ARC_FRAME: [u8; 26] = [
    0x54, 0x26, 0xC4, 0x09, 0x94, 0x11, 0xB0, 0x04, 0x5A, 0x14, 0x05, 0x5B, 0x78, 0x05, 0x5C, 0xDC,
    0x05, 0x5D, 0x40, 0x06, 0x5E, 0x88, 0x13, 0xB8, 0x0B, 0x84,
];
