pub mod book_demo;
