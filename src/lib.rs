//! Client-side workflow core for AYA's palette screen: pick a palette
//! image, have the backend extract its dominant colors, then recolor a
//! separately chosen base image with them and hand the result to the
//! result view.
//!
//! The crate splits into the shared [`store::AyaStore`], the
//! [`service::ServiceClient`] HTTP adapter and the orchestrating
//! [`controller::PaletteWorkflow`]. Host facilities (image picker,
//! clipboard, toasts, navigation) stay behind traits and event values so
//! the core runs against any front-end.

pub mod config;
pub mod controller;
pub mod events;
pub mod picker;
pub mod service;
pub mod state;
pub mod store;

pub use controller::PaletteWorkflow;
pub use service::ServiceClient;
pub use state::{Activity, WorkflowState};
pub use store::{AyaStore, PickedImage};
