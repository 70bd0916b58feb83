//! Retrieval-code generation and the uniqueness allocation loop.
//!
//! A retrieval code is a short, human-typeable numeric string shared by every
//! item of one intake batch. It is not a secret, so a thread-local PRNG is
//! enough. Uniqueness is checked against persisted rows by the caller-supplied
//! closure; this module never touches storage itself.

use std::future::Future;

use rand::Rng;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of digits in a regular retrieval code.
pub const CODE_LENGTH: usize = 6;

/// Allocation attempts before falling back to a widened code.
pub const MAX_ALLOCATION_ATTEMPTS: u32 = 200;

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate a random code of `len` decimal digits.
pub fn generate_code(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// Two regular codes concatenated: the last-resort, unverified 12-digit code.
pub fn widened_code() -> String {
    let mut code = generate_code(CODE_LENGTH);
    code.push_str(&generate_code(CODE_LENGTH));
    code
}

/// Whether `code` has the shape of an allocated code (6 digits, or 12 when widened).
pub fn is_well_formed(code: &str) -> bool {
    (code.len() == CODE_LENGTH || code.len() == CODE_LENGTH * 2)
        && code.bytes().all(|b| b.is_ascii_digit())
}

// ---------------------------------------------------------------------------
// Allocation
// ---------------------------------------------------------------------------

/// Outcome of [`allocate_code`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatedCode {
    pub code: String,
    /// Number of candidates checked.
    pub attempts: u32,
    /// `true` when every candidate collided and the widened fallback was returned.
    pub widened: bool,
}

/// Allocate a code no existing row carries.
///
/// `in_use` is asked about each candidate in turn and must answer whether any
/// persisted row already has that code. The first free candidate wins. After
/// [`MAX_ALLOCATION_ATTEMPTS`] collisions a [`widened_code`] is returned
/// without a further check. Lookup errors abort allocation immediately.
pub async fn allocate_code<F, Fut, E>(mut in_use: F) -> Result<AllocatedCode, E>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
        let candidate = generate_code(CODE_LENGTH);
        if !in_use(candidate.clone()).await? {
            return Ok(AllocatedCode {
                code: candidate,
                attempts: attempt,
                widened: false,
            });
        }
    }

    Ok(AllocatedCode {
        code: widened_code(),
        attempts: MAX_ALLOCATION_ATTEMPTS,
        widened: true,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
