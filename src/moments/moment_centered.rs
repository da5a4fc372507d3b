extern crate nalgebra as na;

use na::DMatrix;
use serde::{Serialize, Deserialize};
use std::fmt;
use crate::{Float,SCALE_REFERENCE_EPS};
use crate::numerics::{binomial_table,is_degenerate};
use crate::moments::{Moment,MomentSource,CentroidProvider,MomentError,is_in_range};
use crate::moments::format::format_moment_grid;

const OBJECT_NAME: &str = "MomentObject";
const GRAVITY_CENTER_NAME: &str = "MomentGravityCenter";

#[derive(Debug,Copy,Clone,PartialEq,Eq,Serialize,Deserialize)]
pub enum NormalizationMode {
    /// Divide by mu00
    NormalizeByMu00,
    /// Divide by (mu02+mu20)/2
    NormalizeByMu02PMu20By2
}

impl fmt::Display for NormalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NormalizationMode::NormalizeByMu00 => write!(f, "by mu00"),
            NormalizationMode::NormalizeByMu02PMu20By2 => write!(f, "by (mu02+mu20)/2")
        }
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct MomentCenteredSerial {
    pub name: String,
    pub order: usize,
    pub normalized: bool,
    pub values: Vec<Float>
}

/// Centered moments mu_ij = sum_k (x_k-x_g)^i (y_k-y_g)^j computed from the raw moments of the linked
/// object and its center of gravity, up to the object's order.
/// mu_ij is stored at get_values()[j*(order+1)+i]. Pictured as a grid (order 3):
///
/// mu00 mu10 mu20 mu30
/// mu01 mu11 mu21 x
/// mu02 mu12 x    x
/// mu03 x    x    x
///
/// Moments of the same order lie on the reverse diagonals. Slots marked x are NaN.
pub struct MomentCentered<'a> {
    object: Option<&'a dyn MomentSource>,
    gravity: Option<&'a dyn CentroidProvider>,
    order: usize,
    values: DMatrix<Float>,
    computed: bool,
    normalized: bool
}

impl<'a> MomentCentered<'a> {

    pub fn new(object: &'a dyn MomentSource, gravity: &'a dyn CentroidProvider) -> MomentCentered<'a> {
        let order = object.get_order();
        MomentCentered {
            object: Some(object),
            gravity: Some(gravity),
            order,
            values: DMatrix::<Float>::from_element(order+1,order+1,Float::NAN),
            computed: false,
            normalized: false
        }
    }

    /// Replaces the dependencies. Values already computed stay readable until the next compute.
    pub fn link_to(&mut self, object: &'a dyn MomentSource, gravity: &'a dyn CentroidProvider) {
        self.object = Some(object);
        self.gravity = Some(gravity);
    }

    pub fn is_computed(&self) -> bool {
        self.computed
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    pub fn try_get(&self, i: usize, j: usize) -> Result<Float, MomentError> {
        match is_in_range(i, j, self.order) {
            true => Ok(self.values[(i,j)]),
            false => Err(MomentError::IndexOutOfRange { i, j, order: self.order })
        }
    }

    pub fn normalize_for_scale(&mut self, mode: NormalizationMode) -> Result<(), MomentError> {
        self.normalize_for_scale_with_eps(mode, SCALE_REFERENCE_EPS)
    }

    /// Divides every mu_ij with i+j >= 2 by reference^((i+j)/2+1). mu00, mu10 and mu01 are left as is.
    pub fn normalize_for_scale_with_eps(&mut self, mode: NormalizationMode, eps: Float) -> Result<(), MomentError> {
        if !self.computed {
            return Err(MomentError::NotComputed);
        }
        if self.normalized {
            return Err(MomentError::AlreadyNormalized);
        }

        let reference = match mode {
            NormalizationMode::NormalizeByMu00 => self.values[(0,0)],
            NormalizationMode::NormalizeByMu02PMu20By2 => (self.try_get(0,2)? + self.try_get(2,0)?)/2.0
        };

        if is_degenerate(reference, eps) {
            log::warn!("{}: refusing to normalize {}, reference {:+e} is degenerate", self.name(), mode, reference);
            return Err(MomentError::DegenerateNormalization { mode, reference });
        }

        for j in 0..=self.order {
            for i in 0..=self.order-j {
                if i+j >= 2 {
                    let exponent = ((i+j) as Float)/2.0 + 1.0;
                    self.values[(i,j)] /= reference.powf(exponent);
                }
            }
        }
        self.normalized = true;
        log::debug!("{}: normalized {} with reference {:+e}", self.name(), mode, reference);
        Ok(())
    }

    pub fn to_serial(&self) -> MomentCenteredSerial {
        MomentCenteredSerial {
            name: self.name().to_string(),
            order: self.order,
            normalized: self.normalized,
            values: self.values.as_slice().to_vec()
        }
    }
}

impl<'a> Moment for MomentCentered<'a> {

    /// All or nothing: on failure the previous values and flags are kept.
    fn compute(&mut self) -> Result<(), MomentError> {
        let object = self.object.ok_or(MomentError::MissingDependency(OBJECT_NAME))?;
        let gravity = self.gravity.ok_or(MomentError::MissingDependency(GRAVITY_CENTER_NAME))?;
        if !object.is_computed() {
            return Err(MomentError::UnreadyDependency(OBJECT_NAME));
        }
        let centroid = match gravity.get_centroid() {
            Some(c) if c.is_finite() => c,
            _ => return Err(MomentError::UnreadyDependency(GRAVITY_CENTER_NAME))
        };

        let order = object.get_order();
        let binomials = binomial_table(order);
        let neg_xg_pows = (0..=order).map(|k| (-centroid.x).powi(k as i32)).collect::<Vec<Float>>();
        let neg_yg_pows = (0..=order).map(|k| (-centroid.y).powi(k as i32)).collect::<Vec<Float>>();

        let mut values = DMatrix::<Float>::from_element(order+1,order+1,Float::NAN);
        for j in 0..=order {
            for i in 0..=order-j {
                let mut mu = 0.0;
                for p in 0..=i {
                    for q in 0..=j {
                        mu += binomials[(i,p)]*binomials[(j,q)]*neg_xg_pows[i-p]*neg_yg_pows[j-q]*object.get(p,q);
                    }
                }
                values[(i,j)] = mu;
            }
        }
        values[(0,0)] = object.get(0,0);

        log::debug!("{}: computed order {} about ({},{})", self.name(), order, centroid.x, centroid.y);
        self.order = order;
        self.values = values;
        self.computed = true;
        self.normalized = false;
        Ok(())
    }

    fn get(&self, i: usize, j: usize) -> Float {
        assert!(is_in_range(i, j, self.order), "centered moment ({},{}) is out of range for order {}", i, j, self.order);
        self.values[(i,j)]
    }

    fn get_values(&self) -> &[Float] {
        self.values.as_slice()
    }

    fn get_order(&self) -> usize {
        self.order
    }

    fn name(&self) -> &str {
        "MomentCentered"
    }
}

impl<'a> Default for MomentCentered<'a> {
    fn default() -> MomentCentered<'a> {
        MomentCentered {
            object: None,
            gravity: None,
            order: 0,
            values: DMatrix::<Float>::from_element(1,1,Float::NAN),
            computed: false,
            normalized: false
        }
    }
}

impl<'a> fmt::Display for MomentCentered<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:\n{}", self.name(), format_moment_grid(self.get_values(), self.order))
    }
}
