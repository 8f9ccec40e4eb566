pub mod matrix;
pub mod rect;
pub mod vector;

pub use matrix::Matrix;
pub use rect::{Margin, Rect};
pub use vector::Vector;
