//! Layer configuration
//!
//! This module contains the settings applied when the layer is created:
//! - Address filtering on or off
//! - PHY selection for driver initialisation
//! - Default receive timeout
//! - Initial address filter table

/// Layer configuration
pub mod layer;

pub use layer::LayerConfig;
