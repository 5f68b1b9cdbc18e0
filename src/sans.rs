//! Internal finite-state machine for implementing decoders.
//!
//! This module is intended for applications that need fine control over
//! decoder internals, for example to decode straight out of a ring buffer.
//! See [`crate::avec`] for implementations covering common decoding patterns.
//!
//! # Architecture
//!
//! All states are represented by a non-copy token. Once enough bytes are
//! ready, transition to another state by calling the token's `advance`
//! method. This will return a successor state token, along with any extracted
//! data.
//!
//! A line location moves through the states in a fixed order:
//!
//! 1. [`ReferenceHeader`](header::ReferenceHeader) (1 byte) validates the
//!    version and location type, and sizes the rest of the reference.
//! 2. [`FirstPoint`](point::FirstPoint) (8 bytes) yields the first point in
//!    absolute coordinates.
//! 3. [`Segment`](segment::Segment) (7 bytes, repeated) yields the distance
//!    from the previous point, then the next point relative to it. The final
//!    segment yields the last point instead, along with an optional
//!    [`Offset`](offset::Offset) state.
//! 4. [`Offset`](offset::Offset) (1 byte, at most twice) yields the positive
//!    then the negative offset, each only if flagged.
//!
//! The distance opening a segment belongs to the point produced by the
//! *previous* state. Implementations must hold each point back until the
//! following segment has been read.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can be
//! constructed.
//!
//! Some areas of the decoding process are not represented in the
//! finite-state machine and must be carefully written:
//!
//! - Reading bytes from the correct place in the buffer.
//!
//! - Rejecting bytes left over once the final state has been reached.
//!
//! Implementers are recommended to begin by studying and modifying the
//! decoder in [`crate::avec::slice`].

pub mod header;
pub mod offset;
pub mod point;
pub mod quantity;
pub mod segment;

/// Entrypoint to the finite-state machine.
pub type Decoder = header::ReferenceHeader;
