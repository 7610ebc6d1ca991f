//! FarmLink marketing site backend: the "book a demo" lead capture path.

pub mod core;
pub mod features;
pub mod shared;
