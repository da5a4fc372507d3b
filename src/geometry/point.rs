use serde::{Serialize, Deserialize};
use crate::Float;

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Point<T> where T: PartialOrd + PartialEq {
    pub x: T,
    pub y: T
}

impl<T> Point<T> where T: PartialOrd + PartialEq {
    pub fn new(x: T, y:T) -> Point<T> {
        Point{x,y}
    }
}

impl Point<Float> {
    pub fn translate(&self, dx: Float, dy: Float) -> Point<Float> {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Uniform scaling about the origin
    pub fn scale(&self, s: Float) -> Point<Float> {
        Point::new(s*self.x, s*self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(Float,Float)> for Point<Float> {
    fn from((x,y): (Float,Float)) -> Point<Float> {
        Point::new(x,y)
    }
}
