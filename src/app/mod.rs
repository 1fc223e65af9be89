//! Core application logic: state management, event handling, and action dispatch.

pub mod action;
pub mod event;
pub mod handler;
pub mod input;
pub mod state;
pub mod store;
pub mod surface;
