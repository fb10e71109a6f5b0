//! Client side of the taskboard app.
//!
//! [`TasksApi`] wraps the store's HTTP interface, [`view`] renders task
//! lists as escaped HTML fragments, and [`TaskManager`] ties the two
//! together behind an injected [`UserInterface`] so the same control
//! flow runs against a real page binding or a test double.

pub mod api;
pub mod error;
pub mod manager;
pub mod view;

pub use api::TasksApi;
pub use error::ClientError;
pub use manager::{TaskManager, UserInterface};
