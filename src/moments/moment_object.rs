extern crate nalgebra as na;

use na::DMatrix;
use crate::Float;
use crate::moments::{MomentSource, MomentError, is_in_range};

/// Container for raw moments m_ij with i+j <= order, filled by whoever integrates the object.
/// Slots above the anti-diagonal are NaN.
#[derive(Debug,Clone)]
pub struct MomentObject {
    order: usize,
    values: DMatrix<Float>
}

impl MomentObject {
    pub fn new(order: usize) -> MomentObject {
        MomentObject { order, values: DMatrix::<Float>::from_element(order+1,order+1,Float::NAN) }
    }

    /// Expects the flat layout j*(order+1)+i
    pub fn from_values(order: usize, values: Vec<Float>) -> Result<MomentObject, MomentError> {
        let expected = (order+1)*(order+1);
        if values.len() != expected {
            return Err(MomentError::InvalidTableLength { order, expected, actual: values.len() });
        }
        let mut object = MomentObject { order, values: DMatrix::<Float>::from_vec(order+1,order+1,values) };
        for j in 0..=order {
            for i in 0..=order {
                if !is_in_range(i, j, order) {
                    object.values[(i,j)] = Float::NAN;
                }
            }
        }
        Ok(object)
    }

    pub fn set(&mut self, i: usize, j: usize, value: Float) {
        assert!(is_in_range(i, j, self.order), "raw moment ({},{}) is out of range for order {}", i, j, self.order);
        self.values[(i,j)] = value;
    }

    pub fn get(&self, i: usize, j: usize) -> Float {
        assert!(is_in_range(i, j, self.order), "raw moment ({},{}) is out of range for order {}", i, j, self.order);
        self.values[(i,j)]
    }

    pub fn get_values(&self) -> &[Float] {
        self.values.as_slice()
    }

    pub fn get_order(&self) -> usize {
        self.order
    }

    pub fn is_computed(&self) -> bool {
        (0..=self.order).all(|j| (0..=self.order-j).all(|i| !self.values[(i,j)].is_nan()))
    }
}

impl MomentSource for MomentObject {
    fn get_order(&self) -> usize {
        self.order
    }

    fn get(&self, p: usize, q: usize) -> Float {
        MomentObject::get(self, p, q)
    }

    fn is_computed(&self) -> bool {
        MomentObject::is_computed(self)
    }
}
