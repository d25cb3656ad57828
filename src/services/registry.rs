//! Account registry
//!
//! Identifier generation and exact-match lookup over the ledger.

use std::collections::HashSet;

use rand::Rng;

use crate::error::{BankError, BankResult};
use crate::models::{Account, AccountId, Ledger, ACCOUNT_ID_RANGE};

/// Random draws tried before falling back to scanning the id space
pub const MAX_RANDOM_ATTEMPTS: usize = 100;

/// Generate an `ACC-####` identifier not used by any account in `ledger`
///
/// Draws random numbers first. When the space is crowded enough that
/// [`MAX_RANDOM_ATTEMPTS`] draws all collide, walks the range from a random
/// offset so any free identifier is still found. Fails with
/// `IdSpaceExhausted` only when all 9000 identifiers are taken.
pub fn generate_id<R: Rng + ?Sized>(ledger: &Ledger, rng: &mut R) -> BankResult<AccountId> {
    let taken: HashSet<&str> = ledger.accounts().iter().map(|a| a.id.as_str()).collect();

    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let candidate = AccountId::from_number(rng.gen_range(ACCOUNT_ID_RANGE));
        if !taken.contains(candidate.as_str()) {
            return Ok(candidate);
        }
    }

    let start = *ACCOUNT_ID_RANGE.start();
    let span = ACCOUNT_ID_RANGE.len() as u16;
    let offset = rng.gen_range(0..span);
    for step in 0..span {
        let candidate = AccountId::from_number(start + (offset + step) % span);
        if !taken.contains(candidate.as_str()) {
            return Ok(candidate);
        }
    }

    Err(BankError::IdSpaceExhausted {
        attempts: MAX_RANDOM_ATTEMPTS + span as usize,
    })
}

/// Exact-string lookup; callers trim user input beforehand
pub fn find_by_id<'a>(ledger: &'a Ledger, id: &str) -> Option<&'a Account> {
    ledger.position(id).and_then(|index| ledger.get(index))
}

/// Mutable exact-string lookup
pub fn find_by_id_mut<'a>(ledger: &'a mut Ledger, id: &str) -> Option<&'a mut Account> {
    let index = ledger.position(id)?;
    ledger.get_mut(index)
}

/// Lookup that turns a miss into `AccountNotFound`
pub fn require<'a>(ledger: &'a Ledger, id: &str) -> BankResult<&'a Account> {
    find_by_id(ledger, id).ok_or_else(|| BankError::account_not_found(id))
}

/// Mutable lookup that turns a miss into `AccountNotFound`
pub fn require_mut<'a>(ledger: &'a mut Ledger, id: &str) -> BankResult<&'a mut Account> {
    find_by_id_mut(ledger, id).ok_or_else(|| BankError::account_not_found(id))
}
