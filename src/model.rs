//! Decoded location references.

use alloc::vec::Vec;

/// A decoded location reference.
///
/// Only line locations are produced today. Further location types will be
/// added as variants, so matches must include a wildcard arm.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LocationReference {
    /// A path along the road network.
    Line(LineLocationReference),
}

impl LocationReference {
    /// The line location, if this reference is one.
    pub fn as_line(&self) -> Option<&LineLocationReference> {
        match self {
            Self::Line(line) => Some(line),
        }
    }
}

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

/// A waypoint along a referenced path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationReferencePoint {
    /// Longitude in WGS84 degrees.
    pub lon: f64,
    /// Latitude in WGS84 degrees.
    pub lat: f64,
    /// Functional road class, from 0 (most important) to 7.
    pub frc: u8,
    /// Form of way.
    pub fow: u8,
    /// Bearing in degrees, the midpoint of an 11.25° sector.
    pub bear: u16,
    /// Lowest functional road class until the next point. Always 7 on the
    /// final point.
    pub lfrcnp: u8,
    /// Distance to the next point in meters. Always 0 on the final point.
    pub dnp: u32,
}

impl LocationReferencePoint {
    /// The position of this point.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lon: self.lon,
            lat: self.lat,
        }
    }

    /// The functional road class as a typed value.
    pub fn functional_road_class(&self) -> Frc {
        Frc::from_bits(self.frc)
    }

    /// The form of way as a typed value.
    pub fn form_of_way(&self) -> Fow {
        Fow::from_bits(self.fow)
    }
}

/// A line location: an ordered chain of at least two points, trimmed by
/// optional offsets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineLocationReference {
    /// Points in path order, first to last.
    pub points: Vec<LocationReferencePoint>,
    /// Fraction of the first segment trimmed from the start, or 0.
    pub positive_offset: f64,
    /// Fraction of the last segment trimmed from the end, or 0.
    pub negative_offset: f64,
}

impl LineLocationReference {
    /// The positive offset in meters along the first segment.
    pub fn positive_offset_m(&self) -> f64 {
        match self.points.first() {
            Some(first) => self.positive_offset * f64::from(first.dnp),
            None => 0.0,
        }
    }

    /// The negative offset in meters along the last segment.
    pub fn negative_offset_m(&self) -> f64 {
        match self.points.iter().rev().nth(1) {
            Some(penultimate) => self.negative_offset * f64::from(penultimate.dnp),
            None => 0.0,
        }
    }

    /// Sum of all distances between consecutive points, in meters.
    pub fn length_m(&self) -> u32 {
        self.points.iter().map(|p| p.dnp).sum()
    }
}

/// Functional road class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Frc {
    Frc0,
    Frc1,
    Frc2,
    Frc3,
    Frc4,
    Frc5,
    Frc6,
    Frc7,
}

impl Frc {
    /// Interpret the low three bits of a value as a road class.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => Self::Frc0,
            1 => Self::Frc1,
            2 => Self::Frc2,
            3 => Self::Frc3,
            4 => Self::Frc4,
            5 => Self::Frc5,
            6 => Self::Frc6,
            _ => Self::Frc7,
        }
    }
}

/// Form of way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fow {
    Undefined,
    Motorway,
    MultipleCarriageway,
    SingleCarriageway,
    Roundabout,
    TrafficSquare,
    SlipRoad,
    Other,
}

impl Fow {
    /// Interpret the low three bits of a value as a form of way.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => Self::Undefined,
            1 => Self::Motorway,
            2 => Self::MultipleCarriageway,
            3 => Self::SingleCarriageway,
            4 => Self::Roundabout,
            5 => Self::TrafficSquare,
            6 => Self::SlipRoad,
            _ => Self::Other,
        }
    }
}
