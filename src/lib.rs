pub mod vector2;

pub use crate::vector2::Vector2;
