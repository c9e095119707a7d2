/// Driver status codes
pub mod status;
/// Radio driver trait and driver option types
pub mod traits;
/// Vendor C driver backend
#[cfg(feature = "ffi")]
pub mod easylink;

pub use status::Status;
pub use traits::{CtrlOption, PhyType, Radio};
#[cfg(feature = "ffi")]
pub use easylink::EasyLinkDriver;
