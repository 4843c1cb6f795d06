//! Custom hooks for the application

pub mod use_order_book;

pub use use_order_book::{OrderFeed, use_order_book};
