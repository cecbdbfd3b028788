//! Unsplash search API integration for image lookup.

mod client;
mod dto;

pub use client::UnsplashImageClient;
