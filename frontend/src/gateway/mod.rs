//! Browser side of the report service boundary.
//!
//! `HttpGateway` implements `common::gateway::ReportGateway` over `fetch`
//! (through `gloo-net`). `load_app_config` asks the hosting server which
//! report service to talk to.

mod http;

pub use http::{load_app_config, HttpGateway};
