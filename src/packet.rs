//! Driver-layout TX/RX packet structures
//!
//! Both structures are `#[repr(C)]` so the `ffi` backend can hand them to the
//! vendor driver as-is.

/// Maximum payload length supported by the driver
pub const MAX_DATA_LENGTH: usize = 128;

/// Size of an IEEE address in bytes
pub const ADDR_SIZE: usize = 8;

/// Number of addresses the hardware filter can hold
pub const MAX_ADDR_FILTERS: usize = 3;

/// Radio timer ticks per millisecond (4 MHz radio timer)
pub const RADIO_TIME_TICKS_PER_MS: u32 = 4_000;

/// Convert milliseconds to radio timer ticks, saturating at `u32::MAX`
pub const fn ms_to_radio_time(ms: u32) -> u32 {
    ms.saturating_mul(RADIO_TIME_TICKS_PER_MS)
}

/// Packet handed to the driver for transmission
#[derive(Debug, Clone)]
#[repr(C)]
pub struct TxPacket {
    /// Destination address
    pub dst_addr: [u8; ADDR_SIZE],
    /// Absolute radio time to transmit at, 0 for immediately
    pub abs_time: u32,
    /// Payload length in bytes
    pub len: u8,
    /// Payload storage
    pub payload: [u8; MAX_DATA_LENGTH],
}

impl TxPacket {
    /// Create an empty packet addressed to the broadcast address
    pub const fn new() -> Self {
        Self {
            dst_addr: [0; ADDR_SIZE],
            abs_time: 0,
            len: 0,
            payload: [0; MAX_DATA_LENGTH],
        }
    }

    /// Valid part of the payload
    pub fn payload(&self) -> &[u8] {
        &self.payload[..(self.len as usize).min(MAX_DATA_LENGTH)]
    }
}

impl Default for TxPacket {
    fn default() -> Self {
        Self::new()
    }
}

/// Packet filled in by the driver on reception
#[derive(Debug, Clone)]
#[repr(C)]
pub struct RxPacket {
    /// Destination address the packet was sent to
    pub dst_addr: [u8; ADDR_SIZE],
    /// Received signal strength in dBm
    pub rssi: i8,
    /// Absolute radio time to turn the receiver on, 0 for immediately
    pub abs_time: u32,
    /// Receive timeout in radio timer ticks, 0 for none
    pub rx_timeout: u32,
    /// Payload length in bytes
    pub len: u8,
    /// Payload storage
    pub payload: [u8; MAX_DATA_LENGTH],
}

impl RxPacket {
    /// Create an empty packet
    pub const fn new() -> Self {
        Self {
            dst_addr: [0; ADDR_SIZE],
            rssi: 0,
            abs_time: 0,
            rx_timeout: 0,
            len: 0,
            payload: [0; MAX_DATA_LENGTH],
        }
    }

    /// Valid part of the payload
    pub fn payload(&self) -> &[u8] {
        &self.payload[..(self.len as usize).min(MAX_DATA_LENGTH)]
    }
}

impl Default for RxPacket {
    fn default() -> Self {
        Self::new()
    }
}
