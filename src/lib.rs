//! Additional layer for the TI EasyLink sub-GHz radio driver
//!
//! This crate wraps an EasyLink radio (CC13xx) with a simplified
//! transmit/receive API and optional hardware address filtering.
//!
//! # Features
//! - Transmit and receive of payloads up to 128 bytes
//! - Up to three IEEE addresses in the radio's hardware filter
//! - Destination tagging for outgoing packets
//! - Destination address and RSSI of the last received packet
//! - `ffi` backend calling the vendor C driver; any other driver can be
//!   plugged in through the [`Radio`](radio::Radio) trait
//! - No unsafe code outside the feature-gated `radio::easylink` backend
//!
//! # Example
//! ```no_run
//! use easylink_layer::{
//!     address::IeeeAddress,
//!     config::LayerConfig,
//!     layer::{EasyLinkLayer, LayerError},
//!     radio::Radio,
//! };
//!
//! fn node<R: Radio>(radio: R) -> Result<(), LayerError<R::Error>> {
//!     let mut layer = EasyLinkLayer::new(radio, LayerConfig::with_address_filtering());
//!     layer.begin()?;
//!
//!     // Accept broadcasts from the hub and packets sent to this node
//!     let local = layer.local_address()?;
//!     layer.set_address_filter(0, IeeeAddress::BROADCAST)?;
//!     layer.set_address_filter(1, local)?;
//!
//!     layer.transmit(b"Hello, hub!")?;
//!
//!     let mut buffer = [0u8; 128];
//!     let len = layer.receive(&mut buffer, 2_000)?;
//!     let _reply = &buffer[..len];
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![no_std]

#[macro_use]
mod fmt;

/// IEEE addresses and the address filter table
pub mod address;

/// Layer configuration
pub mod config;

/// High-level transmit/receive interface
pub mod layer;

/// Driver-layout packet structures
pub mod packet;

/// Radio driver abstraction
pub mod radio;

pub use address::{AddressFilter, IeeeAddress};
pub use config::LayerConfig;
pub use layer::{EasyLinkLayer, LayerError};
