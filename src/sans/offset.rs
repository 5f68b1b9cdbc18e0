//! State processing the offsets trailing a line.

use super::quantity::offset_fraction;

/// The end of a line an offset trims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetKind {
    /// Trims the start of the first segment.
    Positive,
    /// Trims the end of the last segment.
    Negative,
}

/// State token to decode an offset.
#[derive(Debug)]
pub struct Offset {
    pub(super) kind: OffsetKind,
    pub(super) then_negative: bool,
}

impl Offset {
    /// The state decoding the first flagged offset, if any. The positive
    /// offset always precedes the negative offset.
    pub(super) fn first(positive: bool, negative: bool) -> Option<Self> {
        match (positive, negative) {
            (true, then_negative) => Some(Self {
                kind: OffsetKind::Positive,
                then_negative,
            }),
            (false, true) => Some(Self {
                kind: OffsetKind::Negative,
                then_negative: false,
            }),
            (false, false) => None,
        }
    }

    /// The offset this state decodes.
    pub fn kind(&self) -> OffsetKind {
        self.kind
    }

    /// Transition to another state by decoding an offset.
    ///
    /// Returns the kind of offset, the offset as a fraction of the adjacent
    /// segment, and a successor state token if another offset follows.
    pub fn advance(self, r: [u8; 1]) -> (OffsetKind, f64, Option<Offset>) {
        let successor = self.then_negative.then_some(Offset {
            kind: OffsetKind::Negative,
            then_negative: false,
        });

        (self.kind, offset_fraction(r[0]), successor)
    }
}
