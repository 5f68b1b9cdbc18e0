//! State processing the segments between points.

use either::Either::{self, Left, Right};
use tartan_bitfield::bitfield;
use zerocopy::FromBytes;

use crate::model::{Coordinate, LocationReferencePoint};

use super::{
    offset::Offset,
    point::Attributes,
    quantity::{distance, relative_coordinate},
};

/// The lowest road class to the next point, as recorded on the final point.
pub const LAST_LFRCNP: u8 = 7;

/// State token to decode a segment: the distance from the previous point,
/// followed by the next point.
#[derive(Debug)]
pub struct Segment {
    pub(super) remaining: usize,
    pub(super) previous: Coordinate,
}

impl Segment {
    /// The number of segments left, including this one.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Transition to another state by decoding a segment.
    ///
    /// Returns the distance in meters from the previous point to the next,
    /// and either the next point with a successor state token, or the final
    /// point with an optional offset state token.
    pub fn advance(
        self,
        r: [u8; 7],
    ) -> (
        u32,
        Either<(LocationReferencePoint, Segment), (LocationReferencePoint, Option<Offset>)>,
    ) {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct SegmentBytes {
            interval: u8,
            coordinate: [u8; 4],
            attributes: [u8; 2],
        }

        let SegmentBytes {
            interval,
            coordinate,
            attributes,
        } = zerocopy::transmute!(r);

        let coordinate = relative_coordinate(self.previous, coordinate);
        let point = Attributes::read(attributes).at(coordinate);

        let remaining = self.remaining - 1;

        let successor = if remaining != 0 {
            Left((
                point,
                Segment {
                    remaining,
                    previous: coordinate,
                },
            ))
        } else {
            // The final point has no next point, so its LFRCNP bits flag the
            // offsets instead.
            bitfield! {
                struct OffsetFlags(u8) {
                    [5] negative,
                    [6] positive,
                }
            }

            let flags = OffsetFlags(attributes[1]);

            let point = LocationReferencePoint {
                lfrcnp: LAST_LFRCNP,
                ..point
            };

            Right((point, Offset::first(flags.positive(), flags.negative())))
        };

        (distance(interval), successor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sans::offset::OffsetKind;

    const PREVIOUS: Coordinate = Coordinate { lon: 6.0, lat: 51.0 };

    #[test]
    fn intermediate_segment() {
        let state = Segment {
            remaining: 2,
            previous: PREVIOUS,
        };

        let (dnp, successor) = state.advance([0x13, 0x01, 0xA3, 0x02, 0x57, 0x0B, 0x3C]);
        assert_eq!(dnp, 1143);

        let Left((point, next)) = successor else {
            panic!("expected another segment");
        };

        assert_eq!(point.frc, 1);
        assert_eq!(point.fow, 3);
        assert_eq!(point.bear, 321);
        assert_eq!(point.lfrcnp, 1);
        assert_eq!(point.dnp, 0);
        assert_eq!(next.remaining(), 1);
        assert_eq!(next.previous, point.coordinate());
    }

    #[test]
    fn final_segment_without_offsets() {
        let state = Segment {
            remaining: 1,
            previous: PREVIOUS,
        };

        let (_, successor) = state.advance([0x38, 0x07, 0x90, 0x05, 0xF6, 0x0B, 0x13]);

        let Right((point, offset)) = successor else {
            panic!("expected the final point");
        };

        assert_eq!(point.lfrcnp, LAST_LFRCNP);
        assert_eq!(point.dnp, 0);
        assert_eq!(point.bear, 219);
        assert!(offset.is_none());
    }

    #[test]
    fn final_segment_flags_offsets() {
        let state = Segment {
            remaining: 1,
            previous: PREVIOUS,
        };

        let (_, successor) = state.advance([0x00, 0x00, 0x00, 0x00, 0x00, 0x1B, 0b011_00000]);

        let Right((point, Some(offset))) = successor else {
            panic!("expected an offset");
        };

        assert_eq!(point.lfrcnp, LAST_LFRCNP);
        assert_eq!(offset.kind(), OffsetKind::Positive);

        let (_, _, next) = offset.advance([0]);
        assert_eq!(next.map(|o| o.kind()), Some(OffsetKind::Negative));
    }
}
