//! Backend calling the vendor EasyLink C driver
//!
//! Only available with the `ffi` feature. The `EasyLink_*` symbols are
//! provided by the CC13xx SDK the firmware links against.

use crate::address::IeeeAddress;
use crate::packet::{RxPacket, TxPacket, ADDR_SIZE};
use crate::radio::status::Status;
use crate::radio::traits::{CtrlOption, PhyType, Radio};

extern "C" {
    fn EasyLink_init(phy: u32) -> u32;
    fn EasyLink_setCtrl(ctrl: u32, value: u32) -> u32;
    fn EasyLink_enableRxAddrFilter(table: *mut u8, addr_size: u8, num_addrs: u8) -> u32;
    fn EasyLink_getIeeeAddr(ieee_addr: *mut u8) -> u32;
    fn EasyLink_transmit(packet: *mut TxPacket) -> u32;
    fn EasyLink_receive(packet: *mut RxPacket) -> u32;
    fn EasyLink_setFrequency(frequency: u32) -> u32;
    fn EasyLink_getFrequency() -> u32;
    fn EasyLink_setRfPwr(power: i8) -> u32;
    fn EasyLink_getRfPwr(power: *mut i8) -> u32;
    fn EasyLink_abort() -> u32;
}

// Unknown codes come from a driver newer than this binding.
fn check(raw: u32) -> Result<(), Status> {
    Status::from_raw(raw).unwrap_or(Status::CmdError).into_result()
}

/// The vendor EasyLink driver
///
/// The driver keeps global state, so only one instance should exist.
#[derive(Debug)]
pub struct EasyLinkDriver {
    _private: (),
}

impl EasyLinkDriver {
    /// Take the driver handle
    ///
    /// # Safety
    ///
    /// The caller must ensure no other `EasyLinkDriver` is alive and that
    /// nothing else calls into the EasyLink driver while this one is in use.
    pub unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl Radio for EasyLinkDriver {
    type Error = Status;

    fn init(&mut self, phy: PhyType) -> Result<(), Self::Error> {
        check(unsafe { EasyLink_init(phy as u32) })
    }

    fn set_ctrl(&mut self, option: CtrlOption, value: u32) -> Result<(), Self::Error> {
        check(unsafe { EasyLink_setCtrl(option as u32, value) })
    }

    fn enable_rx_addr_filter(
        &mut self,
        table: &[u8],
        addr_size: u8,
        num_addrs: u8,
    ) -> Result<(), Self::Error> {
        if table.len() < addr_size as usize * num_addrs as usize {
            return Err(Status::ParamError);
        }
        // The driver copies the table and never writes through the pointer.
        let table = table.as_ptr().cast_mut();
        check(unsafe { EasyLink_enableRxAddrFilter(table, addr_size, num_addrs) })
    }

    fn ieee_addr(&mut self) -> Result<IeeeAddress, Self::Error> {
        let mut bytes = [0u8; ADDR_SIZE];
        check(unsafe { EasyLink_getIeeeAddr(bytes.as_mut_ptr()) })?;
        Ok(IeeeAddress::new(bytes))
    }

    fn transmit(&mut self, packet: &TxPacket) -> Result<(), Self::Error> {
        let mut packet = packet.clone();
        check(unsafe { EasyLink_transmit(&mut packet) })
    }

    fn receive(&mut self, packet: &mut RxPacket) -> Result<(), Self::Error> {
        check(unsafe { EasyLink_receive(packet) })
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<(), Self::Error> {
        check(unsafe { EasyLink_setFrequency(frequency) })
    }

    fn frequency(&mut self) -> u32 {
        unsafe { EasyLink_getFrequency() }
    }

    fn set_rf_power(&mut self, power: i8) -> Result<(), Self::Error> {
        check(unsafe { EasyLink_setRfPwr(power) })
    }

    fn rf_power(&mut self) -> Result<i8, Self::Error> {
        let mut power = 0i8;
        check(unsafe { EasyLink_getRfPwr(&mut power) })?;
        Ok(power)
    }

    fn abort(&mut self) -> Result<(), Self::Error> {
        check(unsafe { EasyLink_abort() })
    }
}
