//! Tool domain types
//!
//! Identity ([`id::ToolId`], [`action::ActionName`]), declared capabilities
//! ([`action::ToolActionSpec`]) and execution outcomes
//! ([`value_objects::ToolResult`], [`value_objects::ToolError`]).

pub mod action;
pub mod id;
pub mod value_objects;
