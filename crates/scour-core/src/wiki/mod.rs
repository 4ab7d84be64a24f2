mod client;
mod error;

pub use client::{PageExtract, SearchHit, WikiClient};
pub use error::WikiError;
