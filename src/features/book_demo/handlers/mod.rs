pub mod book_demo_handler;

pub use book_demo_handler::*;
