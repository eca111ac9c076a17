//! Inbound adapters: transports that drive the domain services.

pub mod http;
