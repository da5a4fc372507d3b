use thiserror::Error;
use crate::Float;
use crate::geometry::point::Point;
use self::moment_centered::NormalizationMode;

pub mod moment_object;
pub mod moment_centered;
pub mod format;

/// Common contract of the moment descriptors. Each descriptor owns its own flat table,
/// moment (i,j) lives at get_values()[j*(get_order()+1)+i].
pub trait Moment {
    fn compute(&mut self) -> Result<(), MomentError>;
    fn get(&self, i: usize, j: usize) -> Float;
    fn get_values(&self) -> &[Float];
    fn get_order(&self) -> usize;
    fn name(&self) -> &str;
}

/// Supplies raw moments m_pq for p+q <= order.
pub trait MomentSource {
    fn get_order(&self) -> usize;
    fn get(&self, p: usize, q: usize) -> Float;
    fn is_computed(&self) -> bool {
        true
    }
}

/// Supplies the center of gravity (x_g,y_g). None until the provider itself has been computed.
pub trait CentroidProvider {
    fn get_centroid(&self) -> Option<Point<Float>>;
}

impl CentroidProvider for Point<Float> {
    fn get_centroid(&self) -> Option<Point<Float>> {
        Some(*self)
    }
}

impl CentroidProvider for Option<Point<Float>> {
    fn get_centroid(&self) -> Option<Point<Float>> {
        *self
    }
}

#[derive(Debug,Clone,PartialEq,Error)]
pub enum MomentError {
    #[error("moment depends on {0} which was not linked")]
    MissingDependency(&'static str),
    #[error("{0} has not been computed")]
    UnreadyDependency(&'static str),
    #[error("moment ({i},{j}) is out of range for order {order}")]
    IndexOutOfRange { i: usize, j: usize, order: usize },
    #[error("moments have not been computed")]
    NotComputed,
    #[error("moments are already normalized for scale")]
    AlreadyNormalized,
    #[error("cannot normalize {mode}: scale reference {reference:+e} is degenerate")]
    DegenerateNormalization { mode: NormalizationMode, reference: Float },
    #[error("table of order {order} needs {expected} values, got {actual}")]
    InvalidTableLength { order: usize, expected: usize, actual: usize },
    #[error("invalid runtime conf: {0}")]
    Config(String)
}

pub fn flat_index(i: usize, j: usize, order: usize) -> usize {
    j*(order+1)+i
}

pub fn is_in_range(i: usize, j: usize, order: usize) -> bool {
    i+j <= order
}
