use crate::constants::FULL_TURN_CENTIDEGREES;
use crate::error::LdLidarError;
use crate::numeric::{centidegree_to_degree, degree_to_radian, millimeter_to_meter};
use ldlidar_data::{DecodedFrame, LaserScan};

/// Converts a decoded frame into a scan in radians and meters.
///
/// `angle_max` keeps the end angle as reported, while the increment is
/// computed on the end angle unwrapped past 360 degrees. Frames without
/// samples are refused with `EmptyFrame`.
pub fn assemble_scan(frame: &DecodedFrame) -> Result<LaserScan, LdLidarError> {
    let n = frame.points.len();
    if n == 0 {
        return Err(LdLidarError::EmptyFrame);
    }

    let start_angle = frame.start_angle as u32;
    let mut end_angle = frame.end_angle as u32;
    let angle_min = degree_to_radian(centidegree_to_degree(start_angle));
    let angle_max = degree_to_radian(centidegree_to_degree(end_angle));
    if end_angle < start_angle {
        end_angle += FULL_TURN_CENTIDEGREES;
    }
    let angle_diff = centidegree_to_degree(end_angle - start_angle);
    let angle_increment = degree_to_radian(angle_diff / (n as f64));

    let ranges = frame
        .points
        .iter()
        .map(|p| millimeter_to_meter(p.distance))
        .collect::<Vec<_>>();
    let intensities = frame.points.iter().map(|p| p.intensity).collect();
    let range_min = ranges.iter().copied().fold(f64::INFINITY, f64::min);
    let range_max = ranges.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(LaserScan {
        angle_min,
        angle_max,
        angle_increment,
        ranges,
        intensities,
        range_min,
        range_max,
        speed: frame.speed,
        timestamp: frame.timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::decode_frame;
    use crate::test_frames::{EMPTY_FRAME, FULL_FRAME, SHORT_ARC_FRAME, WRAPPED_FRAME};
    use ldlidar_data::{FrameConfig, ScanPoint};

    fn radian_to_degree(e: f64) -> f64 {
        e * 180. / std::f64::consts::PI
    }

    fn frame(start_angle: u16, end_angle: u16, distances: &[u16]) -> DecodedFrame {
        DecodedFrame {
            header: 0x54,
            verlen: 0x2C,
            speed: 3600,
            start_angle,
            end_angle,
            timestamp: 0,
            crc: 0,
            points: distances
                .iter()
                .enumerate()
                .map(|(i, &distance)| ScanPoint {
                    distance,
                    intensity: i as u8,
                })
                .collect(),
        }
    }

    #[test]
    fn test_wraparound() {
        let scan = assemble_scan(&frame(35900, 100, &[1000, 2000])).unwrap();
        assert!(f64::abs(radian_to_degree(scan.angle_min) - 359.) < 1e-9);
        assert!(f64::abs(radian_to_degree(scan.angle_max) - 1.) < 1e-9);
        // (36100 - 35900) / 100 / 2
        assert!(f64::abs(scan.angle_increment - 1f64.to_radians()) < 1e-12);
        assert!(scan.angle_increment >= 0.);
    }

    #[test]
    fn test_no_wraparound() {
        let scan = assemble_scan(&frame(4500, 5000, &[1, 2, 3, 4])).unwrap();
        assert!(f64::abs(radian_to_degree(scan.angle_increment) - 1.25) < 1e-9);
        assert!(f64::abs(radian_to_degree(scan.angle_max) - 50.) < 1e-9);
    }

    #[test]
    fn test_ranges_and_intensities_are_aligned() {
        let distances = [250u16, 0, 12000, 731];
        let scan = assemble_scan(&frame(0, 300, &distances)).unwrap();
        assert_eq!(scan.ranges.len(), distances.len());
        assert_eq!(scan.intensities.len(), distances.len());
        for (i, d) in distances.iter().enumerate() {
            assert_eq!(scan.ranges[i], (*d as f64) / 1000.);
            assert_eq!(scan.intensities[i], i as u8);
        }
        assert_eq!(scan.range_min, 0.);
        assert_eq!(scan.range_max, 12.);
    }

    #[test]
    fn test_empty_frame_is_refused() {
        assert!(matches!(
            assemble_scan(&frame(9000, 9000, &[])),
            Err(LdLidarError::EmptyFrame)
        ));
        let decoded = decode_frame(&EMPTY_FRAME, &FrameConfig::default()).unwrap();
        assert!(matches!(
            assemble_scan(&decoded),
            Err(LdLidarError::EmptyFrame)
        ));
    }

    #[test]
    fn test_decoded_wrapped_frame() {
        let decoded = decode_frame(&WRAPPED_FRAME, &FrameConfig::default()).unwrap();
        let scan = assemble_scan(&decoded).unwrap();
        assert_eq!(scan.ranges, vec![1.0, 1.5]);
        assert_eq!(scan.intensities, vec![0xDC, 0xD0]);
        assert_eq!(scan.range_min, 1.0);
        assert_eq!(scan.range_max, 1.5);
        assert_eq!(scan.speed, 3600);
        assert_eq!(scan.timestamp, 12345);
        assert!(f64::abs(radian_to_degree(scan.angle_increment) - 1.) < 1e-9);
    }

    #[test]
    fn test_round_trip_angles_and_distances() {
        for (packet, start, end, first, last) in [
            (&FULL_FRAME[..], 10., 21., 0.1, 0.6),
            (&SHORT_ARC_FRAME[..], 45., 50., 1.2, 1.5),
        ] {
            let decoded = decode_frame(packet, &FrameConfig::default()).unwrap();
            let scan = assemble_scan(&decoded).unwrap();
            assert!(f64::abs(radian_to_degree(scan.angle_min) - start) < 1e-9);
            assert!(f64::abs(radian_to_degree(scan.angle_max) - end) < 1e-9);
            assert!(f64::abs(scan.ranges[0] - first) < 1e-12);
            assert!(f64::abs(scan.ranges[scan.ranges.len() - 1] - last) < 1e-12);
            assert!(f64::abs(scan.range_min - first) < 1e-12);
            assert!(f64::abs(scan.range_max - last) < 1e-12);
        }
    }
}
