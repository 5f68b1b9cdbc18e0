//! State processing the first point, and the attribute bytes shared by all
//! points.

use tartan_bitfield::bitfield;
use zerocopy::FromBytes;

use crate::model::{Coordinate, LocationReferencePoint};

use super::{
    quantity::{absolute_coordinate, bearing},
    segment::Segment,
};

/// The attributes of a point, as packed into two bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    pub fow: u8,
    pub frc: u8,
    /// Orientation or side of road on other location types. Unused by lines.
    pub reserved: u8,
    /// Bearing in degrees.
    pub bear: u16,
    pub lfrcnp: u8,
}

impl Attributes {
    /// Unpack the two attribute bytes of a point, converting the bearing
    /// sector to degrees.
    pub fn read(r: [u8; 2]) -> Self {
        bitfield! {
            struct Primary(u8) {
                [0..3] fow: u8,
                [3..6] frc: u8,
                [6..8] reserved: u8,
            }
        }

        bitfield! {
            struct Secondary(u8) {
                [0..5] sector: u8,
                [5..8] lfrcnp: u8,
            }
        }

        let primary = Primary(r[0]);
        let secondary = Secondary(r[1]);

        Self {
            fow: primary.fow(),
            frc: primary.frc(),
            reserved: primary.reserved(),
            bear: bearing(secondary.sector()),
            lfrcnp: secondary.lfrcnp(),
        }
    }

    /// Place these attributes at a coordinate. The distance to the next point
    /// is left at 0, to be filled in once it has been read.
    pub(super) fn at(self, coordinate: Coordinate) -> LocationReferencePoint {
        LocationReferencePoint {
            lon: coordinate.lon,
            lat: coordinate.lat,
            frc: self.frc,
            fow: self.fow,
            bear: self.bear,
            lfrcnp: self.lfrcnp,
            dnp: 0,
        }
    }
}

/// State token to decode the first point.
#[derive(Debug)]
pub struct FirstPoint {
    pub(super) segments: usize,
}

impl FirstPoint {
    /// The number of segments following the first point.
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Transition to another state by decoding the first point.
    ///
    /// Returns the first point, and a successor state token. The point's
    /// distance to the next point is carried by the successor's bytes.
    pub fn advance(self, r: [u8; 8]) -> (LocationReferencePoint, Segment) {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct FirstPointBytes {
            coordinate: [u8; 6],
            attributes: [u8; 2],
        }

        let FirstPointBytes {
            coordinate,
            attributes,
        } = zerocopy::transmute!(r);

        let coordinate = absolute_coordinate(coordinate);
        let point = Attributes::read(attributes).at(coordinate);

        let successor = Segment {
            remaining: self.segments,
            previous: coordinate,
        };

        (point, successor)
    }
}
