use color_eyre::eyre::Result;

use moments::{Float,RuntimeConf,load_runtime_conf};
use moments::geometry::point::Point;
use moments::moments::Moment;
use moments::moments::moment_object::MomentObject;
use moments::moments::moment_centered::MomentCentered;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let runtime_conf = match std::env::args().nth(1) {
        Some(path) => load_runtime_conf(&path)?,
        None => RuntimeConf::default()
    };

    let order = 3;
    let points = vec![Point::new(0.0,0.0), Point::new(2.0,0.0), Point::new(2.0,1.0), Point::new(0.0,1.0), Point::new(1.0,3.0)];

    // raw moments of the discrete point set, m_ij = sum x^i y^j
    let mut object = MomentObject::new(order);
    for j in 0..=order {
        for i in 0..=order-j {
            object.set(i, j, points.iter().map(|p: &Point<Float>| p.x.powi(i as i32)*p.y.powi(j as i32)).sum());
        }
    }
    let gravity = Point::new(object.get(1,0)/object.get(0,0), object.get(0,1)/object.get(0,0));

    let mut moment_centered = MomentCentered::new(&object, &gravity);
    moment_centered.compute()?;
    if let Some(mode) = runtime_conf.normalization {
        moment_centered.normalize_for_scale_with_eps(mode, runtime_conf.reference_eps)?;
    }

    if runtime_conf.print_grid {
        println!("{}", moment_centered);
    }
    println!("{}", serde_yaml::to_string(&moment_centered.to_serial())?);

    Ok(())
}
