pub mod likelihood;
pub mod normalizer;
