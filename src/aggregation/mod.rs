//! Period roll-up: bucketing plus simple and ratio-weighted aggregation

pub mod bucketizer;
pub mod simple;
pub mod weighted;

pub use bucketizer::*;
pub use simple::*;
pub use weighted::*;
