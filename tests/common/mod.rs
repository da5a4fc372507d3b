#![allow(dead_code)]

use rand::{Rng, SeedableRng, rngs::SmallRng};
use moments::Float;
use moments::geometry::point::Point;
use moments::moments::moment_object::MomentObject;

pub const TOL: Float = 1e-9;

pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

pub fn random_points(rng: &mut SmallRng, n: usize, half_extent: Float) -> Vec<Point<Float>> {
    (0..n).map(|_| Point::new(rng.gen_range(-half_extent..half_extent), rng.gen_range(-half_extent..half_extent))).collect()
}

/// Discrete raw moments m_ij = sum_k x_k^i y_k^j
pub fn raw_moments_from_points(points: &[Point<Float>], order: usize) -> MomentObject {
    let mut object = MomentObject::new(order);
    for j in 0..=order {
        for i in 0..=order-j {
            object.set(i, j, points.iter().map(|p| p.x.powi(i as i32)*p.y.powi(j as i32)).sum());
        }
    }
    object
}

/// Dense raw moments of a union of disjoint axis aligned rectangles given as (min corner, max corner)
pub fn raw_moments_from_rectangles(rectangles: &[(Point<Float>,Point<Float>)], order: usize) -> MomentObject {
    let integral = |a: Float, b: Float, k: usize| (b.powi(k as i32 + 1) - a.powi(k as i32 + 1))/((k+1) as Float);
    let mut object = MomentObject::new(order);
    for j in 0..=order {
        for i in 0..=order-j {
            object.set(i, j, rectangles.iter().map(|(lo,hi)| integral(lo.x,hi.x,i)*integral(lo.y,hi.y,j)).sum());
        }
    }
    object
}

pub fn gravity_center(object: &MomentObject) -> Point<Float> {
    let m00 = object.get(0,0);
    Point::new(object.get(1,0)/m00, object.get(0,1)/m00)
}

/// mu_ij evaluated straight from the point coordinates
pub fn centered_by_definition(points: &[Point<Float>], i: usize, j: usize) -> Float {
    let n = points.len() as Float;
    let xg = points.iter().map(|p| p.x).sum::<Float>()/n;
    let yg = points.iter().map(|p| p.y).sum::<Float>()/n;
    points.iter().map(|p| (p.x-xg).powi(i as i32)*(p.y-yg).powi(j as i32)).sum()
}

pub fn l_shape() -> Vec<(Point<Float>,Point<Float>)> {
    vec![
        (Point::new(0.0,0.0), Point::new(3.0,1.0)),
        (Point::new(0.0,1.0), Point::new(1.0,4.0))
    ]
}
