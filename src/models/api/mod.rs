// src/models/api/mod.rs

pub mod params;

pub use params::VerifyParams;
