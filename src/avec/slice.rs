//! Slice-based decoder implementation.

use alloc::vec::Vec;

use either::Either::{Left, Right};
use log::{debug, trace};

use crate::{
    model::{LineLocationReference, LocationReference},
    sans::{Decoder, header::SEGMENT_SIZE, offset::OffsetKind},
};

use super::Error;

/// Decode a location reference from a slice.
///
/// This method is also re-exported as `openlr_binary::decode_binary`.
pub fn decode(r: &[u8]) -> Result<LocationReference, Error> {
    let i = &mut 0; // Counter of bytes read, used to read bytes from the tip.

    debug!("Decoding a {} byte location reference.", r.len());

    let first_point = Decoder::advance(take(r, i)?, r.len())?;

    let (mut pending, mut segment) = first_point.advance(take(r, i)?);

    let mut points = Vec::with_capacity(segment.remaining() + 1);

    // Each segment opens with the distance from the point before it, so a
    // point is only complete once the following segment has been read.
    let mut offset = loop {
        let (dnp, successor) = segment.advance(take(r, i)?);

        pending.dnp = dnp;
        trace!("Point {}: {:?}", points.len(), pending);
        points.push(pending);

        match successor {
            Left((point, state)) => {
                pending = point;
                segment = state;
            }
            Right((point, state)) => {
                trace!("Point {}: {:?}", points.len(), point);
                points.push(point);
                break state;
            }
        }
    };

    let end = *i; // Offset to the end of the final segment.

    let mut line = LineLocationReference {
        points,
        ..Default::default()
    };

    while let Some(state) = offset {
        let (kind, fraction, successor) = state.advance(take(r, i)?);

        trace!("{kind:?} offset: {fraction}");

        match kind {
            OffsetKind::Positive => line.positive_offset = fraction,
            OffsetKind::Negative => line.negative_offset = fraction,
        }

        offset = successor;
    }

    // Leftover bytes are the start of a segment cut short.
    if *i != r.len() {
        Err(Error::TruncatedInput {
            needed: end + SEGMENT_SIZE,
            size: r.len(),
        })?;
    }

    debug!("Decoded a line of {} points.", line.points.len());

    Ok(LocationReference::Line(line))
}

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    let s = *i;
    *i += N;

    r.get(s..*i)
        .and_then(|b| b.try_into().ok())
        .ok_or(Error::TruncatedInput {
            needed: *i,
            size: r.len(),
        })
}
