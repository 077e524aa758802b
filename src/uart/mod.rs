pub mod hooks;
pub mod periph;
pub mod regs;

pub use hooks::{DefaultModel, RegModel};
pub use periph::{ReadObserver, UartPeripheral, WriteObserver};
pub use regs::{CtrlFlags, RegIndex, RegisterFile, StatFlags, REG_COUNT, REG_SPAN};
