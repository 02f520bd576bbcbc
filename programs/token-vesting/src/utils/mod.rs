pub mod accrual;
pub mod schedule_id;
pub mod time;
