//! IEEE addresses and the hardware address filter table
//!
//! The CC13xx radio can drop incoming packets whose destination address does
//! not match one of up to three programmed addresses. This module holds the
//! address type and the fixed-size table handed to the driver.

use core::fmt;

use crate::packet::{ADDR_SIZE, MAX_ADDR_FILTERS};

/// IEEE address (8 bytes)
///
/// Bytes are kept in driver order. The CC13xx is little endian, so the bytes
/// `00.12.4B.00.0A.27.CD.6A` read back as the `u64` `0x6ACD270A004B1200`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IeeeAddress([u8; ADDR_SIZE]);

impl IeeeAddress {
    /// General broadcast address
    pub const BROADCAST: Self = Self([0x00; ADDR_SIZE]);
    /// Placeholder for a slot that should never match
    pub const UNUSED: Self = Self([0xFF; ADDR_SIZE]);

    /// Create an address from its raw bytes
    pub const fn new(bytes: [u8; ADDR_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create an address from a slice of exactly 8 bytes
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; ADDR_SIZE] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Raw bytes in driver order
    pub const fn as_bytes(&self) -> &[u8; ADDR_SIZE] {
        &self.0
    }

    /// Address as a little-endian integer
    pub const fn to_u64(self) -> u64 {
        u64::from_le_bytes(self.0)
    }

    /// Address from a little-endian integer
    pub const fn from_u64(value: u64) -> Self {
        Self(value.to_le_bytes())
    }
}

impl From<[u8; ADDR_SIZE]> for IeeeAddress {
    fn from(bytes: [u8; ADDR_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<IeeeAddress> for [u8; ADDR_SIZE] {
    fn from(address: IeeeAddress) -> Self {
        address.0
    }
}

impl fmt::Display for IeeeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

/// Table of addresses accepted by the radio's hardware filter
///
/// Recommended allocation:
/// - hub: slot 0 unused, slot 1 the hub's own address, slot 2 a generic
///   address for commissioning nodes
/// - node: slot 0 general broadcast from the hub, slot 1 the node's own
///   address, slot 2 unused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressFilter {
    slots: [IeeeAddress; MAX_ADDR_FILTERS],
}

impl AddressFilter {
    /// Create a filter with every slot set to the broadcast address
    pub const fn new() -> Self {
        Self {
            slots: [IeeeAddress::BROADCAST; MAX_ADDR_FILTERS],
        }
    }

    /// Create a filter from three addresses, slot 0 first
    pub const fn from_slots(slots: [IeeeAddress; MAX_ADDR_FILTERS]) -> Self {
        Self { slots }
    }

    /// Store an address in a slot. Returns `None` if the slot is out of range.
    pub fn set(&mut self, slot: usize, address: IeeeAddress) -> Option<()> {
        let entry = self.slots.get_mut(slot)?;
        *entry = address;
        Some(())
    }

    /// Address stored in a slot
    pub fn get(&self, slot: usize) -> Option<IeeeAddress> {
        self.slots.get(slot).copied()
    }

    /// Iterate over the slots in order
    pub fn iter(&self) -> impl Iterator<Item = &IeeeAddress> {
        self.slots.iter()
    }

    /// Flat table in the layout expected by the driver
    pub fn to_table(&self) -> [u8; ADDR_SIZE * MAX_ADDR_FILTERS] {
        let mut table = [0u8; ADDR_SIZE * MAX_ADDR_FILTERS];
        for (chunk, address) in table.chunks_exact_mut(ADDR_SIZE).zip(self.slots.iter()) {
            chunk.copy_from_slice(address.as_bytes());
        }
        table
    }
}
