use log::{debug, info};

use vector2::Vector2;

fn main() {
    env_logger::init();

    let mut v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(3.0, 4.0);
    debug!("adding {} and {}", v1, v2);

    v1.add(&v2);
    info!("sum: {}", v1);

    println!("{}", v1);
}
