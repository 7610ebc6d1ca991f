pub mod book_demo_dto;

pub use book_demo_dto::*;
