use crate::address::{AddressFilter, IeeeAddress};
use crate::packet::MAX_ADDR_FILTERS;
use crate::radio::traits::PhyType;

/// Default receive window in milliseconds
pub const DEFAULT_RX_TIMEOUT_MS: u32 = 2_000;

/// Configuration for [`EasyLinkLayer`](crate::layer::EasyLinkLayer)
///
/// Both ends of a link must agree on `address_filtering`: a filtering
/// receiver drops packets from a transmitter that does not tag them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerConfig {
    /// Program the hardware address filter on `begin`
    pub address_filtering: bool,
    /// PHY passed to the driver on `begin`
    pub phy: PhyType,
    /// Receive window used by `receive_default`
    pub rx_timeout_ms: u32,
    /// Initial address filter table
    pub filter: AddressFilter,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            address_filtering: false,
            phy: PhyType::default(),
            rx_timeout_ms: DEFAULT_RX_TIMEOUT_MS,
            filter: AddressFilter::new(),
        }
    }
}

impl LayerConfig {
    /// Create a configuration without address filtering
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with address filtering enabled
    pub fn with_address_filtering() -> Self {
        Self {
            address_filtering: true,
            ..Self::default()
        }
    }

    /// Select the PHY
    pub fn phy(mut self, phy: PhyType) -> Self {
        self.phy = phy;
        self
    }

    /// Set the default receive window
    pub fn rx_timeout_ms(mut self, ms: u32) -> Self {
        self.rx_timeout_ms = ms;
        self
    }

    /// Preload a filter slot
    ///
    /// `slot` must be below `MAX_ADDR_FILTERS`. Release builds ignore an
    /// out-of-range slot.
    pub fn filter_slot(mut self, slot: usize, address: IeeeAddress) -> Self {
        debug_assert!(slot < MAX_ADDR_FILTERS, "filter slot {} out of range", slot);
        let _ = self.filter.set(slot, address);
        self
    }
}
