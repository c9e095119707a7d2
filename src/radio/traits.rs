use crate::address::IeeeAddress;
use crate::packet::{RxPacket, TxPacket};

/// PHY setting the driver is initialised with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum PhyType {
    /// PHY settings provided by the application
    Custom = 0,
    /// 50 kbps 2-GFSK
    #[default]
    Gfsk50Kbps = 1,
    /// 625 bps long range mode
    Lrm625Bps = 2,
    /// 200 kbps 2-GFSK in the 2.4 GHz band
    Gfsk200Kbps2_4Ghz = 3,
    /// 5 kbps SimpleLink long range
    SimpleLinkLongRange5Kbps = 4,
}

/// Driver control options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum CtrlOption {
    /// Address size in bytes used by the address filter
    AddrSize = 0,
    /// Timeout for the driver to return to idle
    IdleTimeout = 1,
    /// Allow several clients to share the radio
    MultiClientMode = 2,
    /// Timeout for asynchronous reception
    AsyncRxTimeout = 3,
    /// Transmit a continuous tone
    TestTone = 4,
    /// Transmit a continuous modulated signal
    TestSignal = 5,
    /// Receive in continuous test mode
    RxTestTone = 6,
}

/// Blocking sub-GHz radio driver interface
///
/// Mirrors the vendor EasyLink calls the layer relies on. Implemented by the
/// `ffi` backend on target and by mocks in tests.
pub trait Radio {
    /// Error type for radio operations
    type Error;

    /// Initialise the radio with the given PHY
    fn init(&mut self, phy: PhyType) -> Result<(), Self::Error>;

    /// Set a driver control option
    fn set_ctrl(&mut self, option: CtrlOption, value: u32) -> Result<(), Self::Error>;

    /// Program the hardware address filter
    ///
    /// `table` holds `num_addrs` addresses of `addr_size` bytes each, back to back.
    fn enable_rx_addr_filter(
        &mut self,
        table: &[u8],
        addr_size: u8,
        num_addrs: u8,
    ) -> Result<(), Self::Error>;

    /// Read the radio's own IEEE address
    fn ieee_addr(&mut self) -> Result<IeeeAddress, Self::Error>;

    /// Transmit a packet, returning once it is sent
    fn transmit(&mut self, packet: &TxPacket) -> Result<(), Self::Error>;

    /// Receive a packet, returning once one arrives or the timeout in
    /// `packet.rx_timeout` expires
    fn receive(&mut self, packet: &mut RxPacket) -> Result<(), Self::Error>;

    /// Set the carrier frequency in Hz
    fn set_frequency(&mut self, frequency: u32) -> Result<(), Self::Error>;

    /// Current carrier frequency in Hz
    fn frequency(&mut self) -> u32;

    /// Set the transmit power in dBm
    fn set_rf_power(&mut self, power: i8) -> Result<(), Self::Error>;

    /// Current transmit power in dBm
    fn rf_power(&mut self) -> Result<i8, Self::Error>;

    /// Abort the ongoing radio operation
    fn abort(&mut self) -> Result<(), Self::Error>;
}
