//! Mock implementations of the HTTP transport for testing.
//!
//! The mock never opens a socket, which lets tests assert both what a client
//! sent and that it sent nothing at all.

mod transport;

pub use transport::{MockReply, MockTransport};
