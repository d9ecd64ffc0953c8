#![forbid(unsafe_code)]

mod fifo;
mod ring;

pub use fifo::{Fifo, FifoError};
pub use ring::RingConfig;
