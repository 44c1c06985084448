// src/models/model.rs
pub trait SdeModel {
    fn drift(&self, x: f64, t: f64) -> f64;
    fn diffusion(&self, x: f64, t: f64) -> f64;
    fn initial_value(&self) -> f64;
}
