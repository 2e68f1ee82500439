//! Core library for the `metricdash` CLI.
//!
//! The pipeline is fetch, clear, render: [`client`] performs the single HTTP
//! request, [`controller`] drives the page flow, and [`view`] turns metric
//! records into HTML tables and SVG bar charts. The binary wires these up
//! through [`entry::run`].
pub mod args;
pub mod client;
pub mod config;
pub mod controller;
pub mod entry;
pub mod error;
pub mod labels;
pub mod metrics;
pub mod server;
pub mod system;
pub mod view;
