pub mod initialize;
pub mod fund_pool;
pub mod start_vesting;
pub mod release;
pub mod revoke;
pub mod release_revoked;
pub mod claim;
pub mod withdraw;
pub mod set_current_time;
pub mod emit_releasable_quote;

pub use initialize::*;
pub use fund_pool::*;
pub use start_vesting::*;
pub use release::*;
pub use revoke::*;
pub use release_revoked::*;
pub use claim::*;
pub use withdraw::*;
pub use set_current_time::*;
pub use emit_releasable_quote::*;
