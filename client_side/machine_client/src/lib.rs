//! Polling client for a remote vending machine.
//!
//! The transport and the rendering surface are supplied by the front-end; everything
//! between them (request shapes, response decoding, the refresh-after-command policy and
//! the polling loop) lives here so the browser page and the terminal share it.

pub mod error;
pub mod transport;
pub mod client;
pub mod view;
pub mod poller;

#[cfg(test)]
mod fake;

pub use error::ClientError;
pub use transport::{HttpMethod, RawResponse, Transport};
pub use client::MachineClient;
pub use view::{format_credit, MachineStatusView, StatusSink};
pub use poller::{PollStats, StatusPoller};
