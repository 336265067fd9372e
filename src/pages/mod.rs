//! Page components for HP Fortress.

mod landing;

pub use landing::Landing;
