//! Control sums for group headers and payment-information blocks

use crate::codec::render_amount;
use crate::types::Transaction;
use crate::{Error, Result};
use rust_decimal::Decimal;

/// Exact sum of all transaction amounts, in input order
///
/// Fails with [`Error::Overflow`] when the total leaves the decimal range.
pub fn sum_amounts(transactions: &[Transaction]) -> Result<Decimal> {
    transactions
        .iter()
        .enumerate()
        .try_fold(Decimal::ZERO, |sum, (i, tx)| {
            sum.checked_add(tx.amount)
                .ok_or(Error::Overflow { count: i + 1 })
        })
}

/// Control sum rendered in wire form; "0.00" for an empty batch
pub fn compute_control_sum(transactions: &[Transaction]) -> Result<String> {
    Ok(render_amount(sum_amounts(transactions)?)?)
}
