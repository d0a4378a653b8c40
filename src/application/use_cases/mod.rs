//! Use case implementations.

mod page_controller;

pub use page_controller::PageController;
