//! HTTP implementation of [`price_core::PricePredictor`].

mod client;

pub use client::HttpPredictor;
