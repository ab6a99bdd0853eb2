//! Text rendering of payroll results.
//!
//! Receipts follow the console layout used by payroll staff: one block per
//! employee and pay period with every amount shown to two decimals. The
//! employee listing, employee profile and work log views print the master
//! file and attendance log as the same staff read them.

mod directory;
mod receipt;
mod worklog;

pub use directory::{EmployeeDetails, EmployeeTable};
pub use receipt::{Receipt, render_header, render_run};
pub use worklog::{WorkLog, render_work_logs, work_logs};

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount to two decimals, rounding half away from zero.
fn money(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
