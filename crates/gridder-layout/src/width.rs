// ABOUTME: Integer width allocation for the panels sharing a row.
// ABOUTME: Splits a fixed total by relative weights so the widths sum exactly.

use std::cmp::Reverse;

use crate::LayoutError;

/// Split `total` columns between panels in proportion to `weights`.
///
/// Every panel gets `floor(total * weight / sum)` columns, but never less than one.
/// Any shortfall goes one column at a time to the widest panels, leftmost first on ties.
/// When the one-column minimum overshoots the total, the widest panels give columns back
/// in the same order.
pub fn allocate_widths(weights: &[u32], total: u32) -> Result<Vec<u32>, LayoutError> {
    if weights.is_empty() {
        return Err(LayoutError::NoWeights);
    }
    if weights.contains(&0) {
        return Err(LayoutError::ZeroWeight);
    }
    if weights.len() > total as usize {
        return Err(LayoutError::RowTooWide {
            count: weights.len(),
            width: total,
        });
    }

    let sum: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    let mut widths: Vec<u32> = weights
        .iter()
        .map(|&w| {
            // w <= sum, so the share never exceeds total
            let share = u64::from(total) * u64::from(w) / sum;
            (share as u32).max(1)
        })
        .collect();

    // sort_by_key is stable: equal widths keep their left-to-right order
    let mut order: Vec<usize> = (0..widths.len()).collect();
    order.sort_by_key(|&i| Reverse(widths[i]));

    let allocated: u32 = widths.iter().sum();
    if allocated < total {
        let shortfall = (total - allocated) as usize;
        for &i in order.iter().cycle().take(shortfall) {
            widths[i] += 1;
        }
    } else if allocated > total {
        let mut excess = allocated - total;
        tracing::trace!(excess, "minimum widths overshoot row");
        while excess > 0 {
            for &i in &order {
                if excess == 0 {
                    break;
                }
                if widths[i] > 1 {
                    widths[i] -= 1;
                    excess -= 1;
                }
            }
        }
    }

    Ok(widths)
}
