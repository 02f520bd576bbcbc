pub mod schedules;
pub mod vesting_state;

pub use schedules::*;
pub use vesting_state::*;
