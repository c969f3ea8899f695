// src/models/app/mod.rs

pub mod app_state;

pub use app_state::AppState;
