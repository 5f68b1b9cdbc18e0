#![no_std]

//! A decoder for OpenLR physical binary location references.
//!
//! An OpenLR reference describes a path along a road network independently of
//! any particular map. This crate turns the compact binary form (version 3)
//! into an ordered chain of [`LocationReferencePoint`]s, ready to be matched
//! against a concrete road network downstream.
//!
//! Most users should call [`decode_base64`] or [`decode_binary`] from the
//! [`avec`] module. The underlying finite-state machine is exposed in
//! [`sans`] for applications needing finer control.
//!
//! Only line locations are decoded. Other location types are recognised in
//! the header and rejected with [`DecodeError::UnsupportedLocationType`].
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `base64`: enable decoding from base64 text (default).

extern crate alloc;

pub mod avec;
pub mod model;
pub mod sans;

#[cfg(feature = "base64")]
pub use avec::decode_base64;
pub use avec::{Error as DecodeError, decode_binary};
pub use model::{
    Coordinate, Fow, Frc, LineLocationReference, LocationReference, LocationReferencePoint,
};
