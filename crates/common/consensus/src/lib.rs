pub mod constants;
pub mod deposit;
pub mod deposit_data;
pub mod eth_1_data;
pub mod primitives;
pub mod pubkey;
pub mod signature;
