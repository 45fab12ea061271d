//! Providers Module - External Explorer APIs
//!
//! One thin client per network: Etherscan (Ethereum), Blockchair (Bitcoin),
//! Trongrid (Tron).

pub mod blockchair;
pub mod etherscan;
pub mod trongrid;

pub use blockchair::*;
pub use etherscan::*;
pub use trongrid::*;
