pub mod cache;
pub mod deposit_log;
pub mod deposit_record;
pub mod error;
pub mod finalized;

pub use cache::DepositCache;
pub use deposit_record::DepositRecord;
pub use error::DepositCacheError;
pub use finalized::{FinalizedDeposits, EMPTY_MERKLE_TRIE_INDEX};
