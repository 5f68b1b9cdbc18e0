//! State processing the status byte.

use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::TryFromBytes;

use super::point::FirstPoint;

/// The only supported version of the binary format.
pub const VERSION: u8 = 3;

/// Bytes taken by the status byte and the first point.
pub const LINE_PREFIX_SIZE: usize = 1 + 6 + 2;

/// Bytes taken by each segment after the first point.
pub const SEGMENT_SIZE: usize = 1 + 4 + 2;

/// The smallest line location: two points and no offsets.
pub const MIN_LINE_SIZE: usize = LINE_PREFIX_SIZE + SEGMENT_SIZE;

/// An error advancing over the status byte.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// Unsupported version of the binary format.
    #[error("Unsupported version ({0}).")]
    UnsupportedVersion(u8),
    /// Location type not decoded by this crate.
    #[error("Unsupported location type ({0}).")]
    UnsupportedLocationType(u8),
    /// Too few bytes to hold a line of two points.
    #[error("A line needs at least {min} bytes, found {0}.", min = MIN_LINE_SIZE)]
    IncompleteLine(usize),
}

/// Location types distinguished by the status byte.
///
/// Some location types share a tag and are told apart by their size or
/// attributes: point along line with POI with access point, and rectangle
/// with grid.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromBytes)]
pub enum LocationType {
    Circle = 0,
    Line = 1,
    Polygon = 2,
    GeoCoordinate = 4,
    PointAlongLine = 5,
    Rectangle = 8,
    ClosedLine = 11,
}

impl LocationType {
    /// Look up the location type for a status byte tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        let location_type: Result<Self, _> = zerocopy::try_transmute!(tag);
        location_type.ok()
    }
}

/// The unvalidated fields of a status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub version: u8,
    pub location_type: u8,
}

impl Status {
    /// Split a status byte into its version and location type tag, without
    /// validating either.
    pub fn read(r: [u8; 1]) -> Self {
        bitfield! {
            struct StatusByte(u8) {
                [0..3] version: u8,
                [3..7] location_type: u8,
            }
        }

        let status = StatusByte(r[0]);

        Self {
            version: status.version(),
            location_type: status.location_type(),
        }
    }
}

/// State token to decode the status byte.
#[derive(Debug)]
pub struct ReferenceHeader;

impl ReferenceHeader {
    /// Transition to another state by decoding the status byte.
    ///
    /// `size` is the length in bytes of the whole reference, including the
    /// status byte. It fixes the number of segments that follow the first
    /// point.
    ///
    /// Returns the successor state token.
    pub fn advance(r: [u8; 1], size: usize) -> Result<FirstPoint, HeaderError> {
        let Status {
            version,
            location_type,
        } = Status::read(r);

        if version != VERSION {
            Err(HeaderError::UnsupportedVersion(version))?;
        }

        if LocationType::from_tag(location_type) != Some(LocationType::Line) {
            Err(HeaderError::UnsupportedLocationType(location_type))?;
        }

        // Up to two trailing offset bytes never complete another segment.
        let segments = size.saturating_sub(LINE_PREFIX_SIZE) / SEGMENT_SIZE;

        if segments == 0 {
            Err(HeaderError::IncompleteLine(size))?;
        }

        Ok(FirstPoint { segments })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_fields() {
        let status = Status::read([0x0B]);
        assert_eq!(status.version, 3);
        assert_eq!(status.location_type, 1);

        // The top bit is not part of the location type.
        let status = Status::read([0x8B]);
        assert_eq!(status.location_type, 1);
    }

    #[test]
    fn location_tags() {
        assert_eq!(LocationType::from_tag(1), Some(LocationType::Line));
        assert_eq!(LocationType::from_tag(2), Some(LocationType::Polygon));
        assert_eq!(LocationType::from_tag(11), Some(LocationType::ClosedLine));
        assert_eq!(LocationType::from_tag(3), None);
    }

    #[test]
    fn rejects_other_versions() {
        let result = ReferenceHeader::advance([0x02 | 1 << 3], 16);
        assert!(matches!(result, Err(HeaderError::UnsupportedVersion(2))));
    }

    #[test]
    fn rejects_other_location_types() {
        let result = ReferenceHeader::advance([0x03 | 2 << 3], 16);
        assert!(matches!(result, Err(HeaderError::UnsupportedLocationType(2))));
    }

    #[test]
    fn sizes_segments() {
        assert_eq!(ReferenceHeader::advance([0x0B], 16).unwrap().segments(), 1);
        assert_eq!(ReferenceHeader::advance([0x0B], 18).unwrap().segments(), 1);
        assert_eq!(ReferenceHeader::advance([0x0B], 23).unwrap().segments(), 2);

        let result = ReferenceHeader::advance([0x0B], 15);
        assert!(matches!(result, Err(HeaderError::IncompleteLine(15))));
    }

    #[test]
    fn errors_display() {
        use alloc::string::ToString;

        assert_eq!(
            HeaderError::IncompleteLine(9).to_string(),
            "A line needs at least 16 bytes, found 9."
        );
        assert_eq!(
            HeaderError::UnsupportedLocationType(2).to_string(),
            "Unsupported location type (2)."
        );
    }
}
