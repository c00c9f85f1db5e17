//! Statistical process control: baseline selection and control-chart families.

pub mod baseline;
pub mod calculator;
pub mod individuals;
pub mod proportion;
pub mod rate;

pub use baseline::*;
pub use calculator::*;
pub use individuals::*;
pub use proportion::*;
pub use rate::*;
