//! Simplified transmit/receive interface with optional address filtering
//!
//! [`EasyLinkLayer`] owns the radio driver together with one TX and one RX
//! packet. Each call copies the payload in or out of these packets and
//! delegates to the driver.

use heapless::Vec;

use crate::{
    address::{AddressFilter, IeeeAddress},
    config::LayerConfig,
    packet::{ms_to_radio_time, RxPacket, TxPacket, ADDR_SIZE, MAX_ADDR_FILTERS, MAX_DATA_LENGTH},
    radio::{
        status::Status,
        traits::{CtrlOption, Radio},
    },
};

/// Layer error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerError<E> {
    /// Radio driver error
    Radio(E),
    /// Payload longer than `MAX_DATA_LENGTH`
    PayloadTooLarge,
    /// Caller buffer cannot hold the received payload
    BufferTooSmall,
    /// Address filter slot out of range
    InvalidSlot,
    /// Address filtering was not enabled for this layer
    FilteringDisabled,
}

impl<E> LayerError<E> {
    /// Whether the call was rejected before reaching the driver
    pub fn is_param_error(&self) -> bool {
        !matches!(self, LayerError::Radio(_))
    }

    /// Driver status equivalent of this error
    pub fn status(self) -> Status
    where
        E: Into<Status>,
    {
        match self {
            LayerError::Radio(error) => error.into(),
            _ => Status::ParamError,
        }
    }
}

/// Convenience layer over an EasyLink radio
pub struct EasyLinkLayer<R: Radio> {
    radio: R,
    config: LayerConfig,
    filter: AddressFilter,
    tx_packet: TxPacket,
    rx_packet: RxPacket,
}

impl<R: Radio> EasyLinkLayer<R> {
    /// Create a new layer
    ///
    /// The radio is not touched until [`begin`](Self::begin).
    pub fn new(radio: R, config: LayerConfig) -> Self {
        Self {
            radio,
            filter: config.filter,
            config,
            tx_packet: TxPacket::new(),
            rx_packet: RxPacket::new(),
        }
    }

    /// Create a new layer without address filtering
    pub fn with_defaults(radio: R) -> Self {
        Self::new(radio, LayerConfig::default())
    }

    /// Initialise and start the radio
    ///
    /// With address filtering enabled, the filter table is programmed as well.
    pub fn begin(&mut self) -> Result<(), LayerError<R::Error>> {
        debug!("easylink: init, filtering={}", self.config.address_filtering);
        self.radio.init(self.config.phy).map_err(LayerError::Radio)?;

        if self.config.address_filtering {
            self.radio
                .set_ctrl(CtrlOption::AddrSize, ADDR_SIZE as u32)
                .map_err(LayerError::Radio)?;
            self.apply_filter()?;
        }

        info!("easylink: radio started");
        Ok(())
    }

    /// Whether address filtering is enabled
    pub fn is_address_filtering(&self) -> bool {
        self.config.address_filtering
    }

    /// Current configuration
    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    /// Send a payload immediately
    ///
    /// Payloads longer than `MAX_DATA_LENGTH` are rejected, never truncated.
    pub fn transmit(&mut self, payload: &[u8]) -> Result<(), LayerError<R::Error>> {
        if payload.len() > MAX_DATA_LENGTH {
            warn!("easylink: payload of {} bytes rejected", payload.len());
            return Err(LayerError::PayloadTooLarge);
        }

        self.tx_packet.payload[..payload.len()].copy_from_slice(payload);
        self.tx_packet.len = payload.len() as u8;
        self.tx_packet.abs_time = ms_to_radio_time(0);

        trace!("easylink: tx {} bytes", payload.len());
        self.radio.transmit(&self.tx_packet).map_err(LayerError::Radio)
    }

    /// Receive a payload into `buffer`, listening for at most `ms` milliseconds
    ///
    /// Returns the number of bytes received. The destination address and
    /// RSSI of the packet are available afterwards through
    /// [`rx_destination`](Self::rx_destination) and [`rx_rssi`](Self::rx_rssi).
    pub fn receive(&mut self, buffer: &mut [u8], ms: u32) -> Result<usize, LayerError<R::Error>> {
        self.rx_packet.rx_timeout = ms_to_radio_time(ms);
        self.rx_packet.abs_time = ms_to_radio_time(0);

        self.radio.receive(&mut self.rx_packet).map_err(LayerError::Radio)?;

        let len = self.rx_packet.len as usize;
        if len > MAX_DATA_LENGTH {
            warn!("easylink: driver reported {} bytes", len);
            return Err(LayerError::PayloadTooLarge);
        }
        if len > buffer.len() {
            warn!("easylink: rx of {} bytes does not fit in {}", len, buffer.len());
            return Err(LayerError::BufferTooSmall);
        }

        buffer[..len].copy_from_slice(&self.rx_packet.payload[..len]);
        trace!("easylink: rx {} bytes, rssi {}", len, self.rx_packet.rssi);
        Ok(len)
    }

    /// Receive using the configured default window
    pub fn receive_default(&mut self, buffer: &mut [u8]) -> Result<usize, LayerError<R::Error>> {
        let ms = self.config.rx_timeout_ms;
        self.receive(buffer, ms)
    }

    /// Receive into an owned buffer
    pub fn receive_vec(
        &mut self,
        ms: u32,
    ) -> Result<Vec<u8, MAX_DATA_LENGTH>, LayerError<R::Error>> {
        let mut buffer = [0u8; MAX_DATA_LENGTH];
        let len = self.receive(&mut buffer, ms)?;
        Vec::from_slice(&buffer[..len]).map_err(|_| LayerError::BufferTooSmall)
    }

    /// Store an address in the filter and reprogram the radio
    ///
    /// Fails with a parameter error if filtering is disabled or `slot` is not
    /// in `0..3`. The slot is stored before the radio is reprogrammed, so it
    /// keeps the new address even when the driver rejects the table.
    pub fn set_address_filter(
        &mut self,
        slot: usize,
        address: IeeeAddress,
    ) -> Result<(), LayerError<R::Error>> {
        self.check_slot(slot)?;
        self.filter.set(slot, address).ok_or(LayerError::InvalidSlot)?;
        debug!("easylink: filter slot {} = {}", slot, address);
        self.apply_filter()
    }

    /// Address stored in a filter slot
    pub fn address_filter(&self, slot: usize) -> Result<IeeeAddress, LayerError<R::Error>> {
        self.check_slot(slot)?;
        self.filter.get(slot).ok_or(LayerError::InvalidSlot)
    }

    /// The radio's own IEEE address
    pub fn local_address(&mut self) -> Result<IeeeAddress, LayerError<R::Error>> {
        self.radio.ieee_addr().map_err(LayerError::Radio)
    }

    /// Destination address for subsequent transmissions
    pub fn set_tx_destination(&mut self, address: IeeeAddress) {
        self.tx_packet.dst_addr = *address.as_bytes();
    }

    /// Destination address of the last transmission setup
    pub fn tx_destination(&self) -> IeeeAddress {
        IeeeAddress::new(self.tx_packet.dst_addr)
    }

    /// Destination address of the last received packet
    pub fn rx_destination(&self) -> IeeeAddress {
        IeeeAddress::new(self.rx_packet.dst_addr)
    }

    /// Signal strength of the last received packet in dBm
    pub fn rx_rssi(&self) -> i8 {
        self.rx_packet.rssi
    }

    /// Set the carrier frequency in Hz
    pub fn set_frequency(&mut self, frequency: u32) -> Result<(), LayerError<R::Error>> {
        self.radio.set_frequency(frequency).map_err(LayerError::Radio)
    }

    /// Current carrier frequency in Hz
    pub fn frequency(&mut self) -> u32 {
        self.radio.frequency()
    }

    /// Set the transmit power in dBm
    pub fn set_rf_power(&mut self, power: i8) -> Result<(), LayerError<R::Error>> {
        self.radio.set_rf_power(power).map_err(LayerError::Radio)
    }

    /// Current transmit power in dBm
    pub fn rf_power(&mut self) -> Result<i8, LayerError<R::Error>> {
        self.radio.rf_power().map_err(LayerError::Radio)
    }

    /// Abort the ongoing radio operation
    pub fn abort(&mut self) -> Result<(), LayerError<R::Error>> {
        self.radio.abort().map_err(LayerError::Radio)
    }

    /// Get radio reference
    pub fn radio(&self) -> &R {
        &self.radio
    }

    /// Get mutable radio reference
    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    /// Give back the radio
    pub fn release(self) -> R {
        self.radio
    }

    fn check_slot(&self, slot: usize) -> Result<(), LayerError<R::Error>> {
        if !self.config.address_filtering {
            warn!("easylink: address filtering is disabled");
            return Err(LayerError::FilteringDisabled);
        }
        if slot >= MAX_ADDR_FILTERS {
            warn!("easylink: filter slot {} out of range", slot);
            return Err(LayerError::InvalidSlot);
        }
        Ok(())
    }

    fn apply_filter(&mut self) -> Result<(), LayerError<R::Error>> {
        let table = self.filter.to_table();
        self.radio
            .enable_rx_addr_filter(&table, ADDR_SIZE as u8, MAX_ADDR_FILTERS as u8)
            .map_err(LayerError::Radio)
    }
}
