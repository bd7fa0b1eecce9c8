//! The classwork walkthrough: every example type exercised in turn, printed as a
//! console transcript, with the function plots handed to a chart sink.

pub mod config;
pub mod demo;

pub use config::DemoConfig;
pub use demo::{run, Section};
