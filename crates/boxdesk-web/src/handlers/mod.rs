//! Request handlers for the host server

pub mod api;
pub mod pages;
