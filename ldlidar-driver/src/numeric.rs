pub(crate) fn to_u16_le(low: u8, high: u8) -> u16 {
    ((high as u16) << 8) + (low as u16)
}

pub(crate) fn degree_to_radian(degree: f64) -> f64 {
    degree * std::f64::consts::PI / 180.
}

pub(crate) fn centidegree_to_degree(angle: u32) -> f64 {
    (angle as f64) / 100.
}

pub(crate) fn millimeter_to_meter(distance: u16) -> f64 {
    (distance as f64) / 1000.
}

pub(crate) fn to_string(data: &[u8]) -> String {
    data.iter()
        .map(|e| format!("{:02X}", e))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_u16_le() {
        assert_eq!(to_u16_le(0xE8, 0x03), 1000);
        assert_eq!(to_u16_le(0x3C, 0x8C), 35900);
        assert_eq!(to_u16_le(0xFF, 0xFF), u16::MAX);
    }

    #[test]
    fn test_unit_conversion() {
        assert!((degree_to_radian(180.) - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(centidegree_to_degree(35900), 359.);
        assert_eq!(millimeter_to_meter(1500), 1.5);
        assert_eq!(to_string(&[0x54, 0x2C, 0x0A]), "54 2C 0A");
    }
}
