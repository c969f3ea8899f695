// src/utils/whatsapp/mod.rs

pub mod client;

pub use client::{deliver, GraphApiClient, Messenger};
