// Network adapter for render host sockets.

pub mod client;

pub use client::ws_handler;
