//! Tool adapters

mod web;

pub use web::WebRequestTool;
