/// Status codes reported by the EasyLink driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum Status {
    /// Success
    Success = 0,
    /// Configuration error
    ConfigError = 1,
    /// Parameter error
    ParamError = 2,
    /// Memory error
    MemError = 3,
    /// Radio command error
    CmdError = 4,
    /// Transmit error
    TxError = 5,
    /// Receive error
    RxError = 6,
    /// Receive timed out
    RxTimeout = 7,
    /// Receive buffer error
    RxBufferError = 8,
    /// Radio busy
    BusyError = 9,
    /// Operation aborted
    Aborted = 10,
}

impl Status {
    /// Decode a raw driver status code
    pub fn from_raw(raw: u32) -> Option<Self> {
        let status = match raw {
            0 => Status::Success,
            1 => Status::ConfigError,
            2 => Status::ParamError,
            3 => Status::MemError,
            4 => Status::CmdError,
            5 => Status::TxError,
            6 => Status::RxError,
            7 => Status::RxTimeout,
            8 => Status::RxBufferError,
            9 => Status::BusyError,
            10 => Status::Aborted,
            _ => return None,
        };
        Some(status)
    }

    /// `Ok(())` for `Success`, the status itself otherwise
    pub fn into_result(self) -> Result<(), Status> {
        match self {
            Status::Success => Ok(()),
            other => Err(other),
        }
    }
}
