//! Expansion of recurring transaction seeds into future occurrences.
//!
//! The expander only constructs values; persisting the seed together with the
//! returned rows (all or nothing) is the caller's job.

use uuid::Uuid;

use crate::domain::{Recurrence, Transaction};
use crate::errors::LedgerError;

/// Suggested cap for [`expand_recurrence_capped`] when a caller wants to
/// expand a rule that carries no bound of its own.
pub const DEFAULT_EXPANSION_CAP: usize = 1024;

/// Expands a seed transaction into the ordered sequence of its future
/// occurrences, one per frequency step.
///
/// `occurrences` counts the seed itself, so a rule with `occurrences = N`
/// yields `N - 1` new rows and `occurrences = 1` yields none. `end_date` is
/// an inclusive cap; no emitted row is dated after it. Every emitted row is a
/// copy of the seed with a fresh id, the stepped date, and no recurrence
/// rule, so re-reading generated rows never re-triggers expansion.
///
/// A rule with neither bound would never terminate and is rejected with
/// [`LedgerError::UnboundedRecurrence`]; use [`expand_recurrence_capped`] to
/// expand such rules under an explicit cap.
pub fn expand_recurrence(seed: &Transaction) -> Result<Vec<Transaction>, LedgerError> {
    let rule = match seed.recurrence.as_ref() {
        Some(rule) => rule,
        None => return Ok(Vec::new()),
    };
    if !rule.is_bounded() {
        return Err(LedgerError::UnboundedRecurrence);
    }
    expand_bounded(seed, rule, usize::MAX)
}

/// Like [`expand_recurrence`], but stops after at most `cap` emitted rows.
/// This is the caller-supplied bound that makes open-ended rules expandable.
pub fn expand_recurrence_capped(
    seed: &Transaction,
    cap: usize,
) -> Result<Vec<Transaction>, LedgerError> {
    let rule = match seed.recurrence.as_ref() {
        Some(rule) => rule,
        None => return Ok(Vec::new()),
    };
    expand_bounded(seed, rule, cap)
}

fn expand_bounded(
    seed: &Transaction,
    rule: &Recurrence,
    cap: usize,
) -> Result<Vec<Transaction>, LedgerError> {
    if rule.occurrences == Some(0) {
        return Err(LedgerError::InvalidInput(
            "recurrence occurrences must be at least 1".into(),
        ));
    }

    let mut generated = Vec::new();
    let mut current_date = seed.date;
    let mut count = 0u32;

    // The seed itself is the first occurrence; emission starts at the second.
    loop {
        count += 1;
        if let Some(occurrences) = rule.occurrences {
            if count >= occurrences {
                break;
            }
        }
        if generated.len() >= cap {
            break;
        }

        current_date = rule.frequency.next_date(current_date);

        if let Some(end_date) = rule.end_date {
            if current_date > end_date {
                break;
            }
        }

        let mut occurrence = seed.clone();
        occurrence.id = Uuid::new_v4();
        occurrence.date = current_date;
        occurrence.recurrence = None;
        generated.push(occurrence);
    }

    tracing::debug!(
        seed = %seed.id,
        frequency = %rule.frequency,
        generated = generated.len(),
        "expanded recurrence"
    );
    Ok(generated)
}
