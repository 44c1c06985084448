pub mod brownian;
pub mod model;
