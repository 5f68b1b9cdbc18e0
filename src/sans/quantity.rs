//! Conversions from quantized wire values to physical quantities.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use zerocopy::{FromBytes, byteorder::big_endian::I16};

use crate::model::Coordinate;

/// Relative coordinates are stored in hundred-thousandths of a degree.
pub const DECA_MICRO_DEGREES: f64 = 100_000.0;

/// Round to the nearest integer, taking exact halves upward (2.5 to 3).
///
/// Negative values are outside the range of any decoded quantity and
/// saturate to 0.
pub fn round_half_up(value: Decimal) -> u32 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// Convert a signed 24-bit big-endian value to degrees.
///
/// The value is moved half a unit toward zero, so it lands in the middle of
/// its quantization bucket rather than on the edge.
pub fn absolute_degrees(r: [u8; 3]) -> f64 {
    let value = i32::from_be_bytes([r[0], r[1], r[2], 0]) >> 8;

    ((f64::from(value) - f64::from(value.signum()) * 0.5) * 360.0) / f64::from(1 << 24)
}

/// Read a coordinate stored as two signed 24-bit values.
pub fn absolute_coordinate(r: [u8; 6]) -> Coordinate {
    #[repr(C, packed)]
    #[derive(FromBytes)]
    struct AbsoluteCoordinate {
        lon: [u8; 3],
        lat: [u8; 3],
    }

    let AbsoluteCoordinate { lon, lat } = zerocopy::transmute!(r);

    Coordinate {
        lon: absolute_degrees(lon),
        lat: absolute_degrees(lat),
    }
}

/// Read a coordinate stored as two signed 16-bit differences from a previous
/// coordinate.
pub fn relative_coordinate(previous: Coordinate, r: [u8; 4]) -> Coordinate {
    #[repr(C, packed)]
    #[derive(FromBytes)]
    struct RelativeCoordinate {
        lon: I16,
        lat: I16,
    }

    let RelativeCoordinate { lon, lat } = zerocopy::transmute!(r);

    Coordinate {
        lon: previous.lon + f64::from(lon.get()) / DECA_MICRO_DEGREES,
        lat: previous.lat + f64::from(lat.get()) / DECA_MICRO_DEGREES,
    }
}

/// Convert a bearing sector index to the bearing in degrees at its middle.
pub fn bearing(sector: u8) -> u16 {
    let value = Decimal::from(sector) * Decimal::new(1125, 2) + Decimal::new(5625, 3);

    // At most 31 sectors of 11.25°.
    round_half_up(value) as u16
}

/// Convert a distance interval to meters, at the middle of the interval.
pub fn distance(interval: u8) -> u32 {
    let width = Decimal::new(586, 1);

    round_half_up((Decimal::from(interval) + Decimal::new(5, 1)) * width)
}

/// Convert an offset bucket to a fraction of a segment, in (0, 1).
pub fn offset_fraction(bucket: u8) -> f64 {
    (f64::from(bucket) + 0.5) / 256.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        -1e-12 < a - b && a - b < 1e-12
    }

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_half_up(Decimal::new(5, 1)), 1);
        assert_eq!(round_half_up(Decimal::new(25, 1)), 3);
        assert_eq!(round_half_up(Decimal::new(24, 1)), 2);
        assert_eq!(round_half_up(Decimal::new(1465, 1)), 147);
        assert_eq!(round_half_up(Decimal::new(-25, 1)), 0);
    }

    #[test]
    fn bearing_sector_midpoints() {
        assert_eq!(bearing(0), 6);
        assert_eq!(bearing(7), 84);
        assert_eq!(bearing(28), 321);
        assert_eq!(bearing(31), 354);
    }

    #[test]
    fn distance_interval_midpoints() {
        assert_eq!(distance(0), 29);
        // 146.5 exactly, which binary floating point cannot be trusted with.
        assert_eq!(distance(2), 147);
        assert_eq!(distance(19), 1143);
        assert_eq!(distance(255), 14972);
    }

    #[test]
    fn offset_buckets() {
        assert_eq!(offset_fraction(0), 0.5 / 256.0);
        assert_eq!(offset_fraction(3), 0.013671875);
        assert_eq!(offset_fraction(124), 0.486328125);
    }

    #[test]
    fn absolute_degrees_centered() {
        assert_eq!(absolute_degrees([0, 0, 0]), 0.0);
        assert_eq!(absolute_degrees([0, 0, 1]), 0.5 * 360.0 / 16_777_216.0);
        assert_eq!(absolute_degrees([0xFF, 0xFF, 0xFF]), -0.5 * 360.0 / 16_777_216.0);
        assert_eq!(absolute_degrees([0x40, 0, 0]), (4_194_304.0 - 0.5) * 360.0 / 16_777_216.0);
    }

    #[test]
    fn absolute_coordinate_is_deterministic() {
        let r = [0x04, 0x67, 0xEA, 0x24, 0x59, 0xF1];
        let a = absolute_coordinate(r);
        let b = absolute_coordinate(r);

        assert_eq!(a, b);
        assert!(close(a.lon, 6.195806264877319));
        assert!(close(a.lat, 51.11905217170715));
    }

    #[test]
    fn relative_coordinate_signed() {
        let previous = Coordinate { lon: 1.0, lat: 2.0 };
        // +100 and -100 hundred-thousandths.
        let next = relative_coordinate(previous, [0x00, 0x64, 0xFF, 0x9C]);

        assert!(close(next.lon, 1.001));
        assert!(close(next.lat, 1.999));
    }
}
