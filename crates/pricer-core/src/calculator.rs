//! # Legacy Calculator
//!
//! The single-function calculator that predates the pluggable rules. Every
//! rule is hard-wired into one branchy function, so exercising one branch
//! means supplying values for all the others.
//!
//! Kept because existing callers depend on its exact behavior, which differs
//! from the pluggable rules in small ways:
//!
//! | Aspect            | `calculate_final_price`     | Pluggable rules              |
//! |-------------------|-----------------------------|------------------------------|
//! | Season matching   | exact case only             | case-insensitive             |
//! | `CLEARANCE`       | not recognized              | flat 50 off                  |
//! | VIP               | flat 10 off, no floor       | membership: flat 20 off      |
//! | Holiday           | extra 5% off                | (no counterpart)             |

use serde::{Deserialize, Serialize};

use crate::types::Amount;

/// Customer and calendar flags for [`calculate_final_price`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFlags {
    pub vip: bool,
    pub holiday: bool,
}

/// Computes a final price the legacy way.
///
/// Steps, in order:
/// 1. `"SUMMER"` ×0.90, `"WINTER"` ×0.80 (exact case), anything else unchanged
/// 2. VIP: −10 (may go negative)
/// 3. Holiday: ×0.95
///
/// ## Example
/// ```rust
/// use pricer_core::calculator::{calculate_final_price, OrderFlags};
///
/// let price = calculate_final_price(100.0, "SUMMER", OrderFlags::default());
/// assert_eq!(price, 90.0);
/// ```
pub fn calculate_final_price(amount: Amount, season: &str, flags: OrderFlags) -> Amount {
    let mut total = amount;

    if season == "SUMMER" {
        total *= 0.90;
    } else if season == "WINTER" {
        total *= 0.80;
    }

    if flags.vip {
        total -= 10.0;
    }
    if flags.holiday {
        total *= 0.95;
    }

    total
}
