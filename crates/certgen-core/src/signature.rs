//! Signature slot keys.
//!
//! Signatures are the one repeatable field: each placement gets its own key
//! of the form `signature<N>_pos<M>` so several placements of the same
//! logical signature can coexist in a layout. Older saves used `signature`
//! or `signature<N>` with a single placement per signature.

use crate::key::FieldKey;
use winnow::ascii::digit1;
use winnow::combinator::{opt, preceded};
use winnow::prelude::*;

/// Parsed view of a signature-family key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureSlot {
    /// `signature<N>_pos<M>`
    Multi { signature: u32, position: u32 },
    /// `signature` (treated as signature 1) or `signature<N>`.
    Legacy { signature: u32 },
    /// Starts with `signature` but matches neither form. Holds the text
    /// after the prefix.
    Other { suffix: String },
}

impl SignatureSlot {
    /// Parse a key. Returns `None` for keys outside the signature family.
    pub fn parse(key: &str) -> Option<Self> {
        let suffix = key.strip_prefix("signature")?;
        match slot.parse(key) {
            Ok(slot) => Some(slot),
            Err(_) => Some(SignatureSlot::Other {
                suffix: suffix.to_string(),
            }),
        }
    }

    pub fn of(key: FieldKey) -> Option<Self> {
        Self::parse(key.as_str())
    }
}

/// Whether a sanitized field name asks for a new signature placement.
pub fn is_signature_request(name: &str) -> bool {
    name.eq_ignore_ascii_case("signature")
}

/// Smallest `position >= 1` such that `signature<signature>_pos<position>`
/// is not taken according to `is_taken`.
pub fn next_free_position(signature: u32, mut is_taken: impl FnMut(FieldKey) -> bool) -> u32 {
    let mut position = 1;
    while is_taken(FieldKey::signature_slot(signature, position)) {
        position += 1;
    }
    position
}

fn slot(input: &mut &str) -> ModalResult<SignatureSlot> {
    "signature".parse_next(input)?;
    let signature = opt(digit1.parse_to::<u32>()).parse_next(input)?;
    let position = opt(preceded("_pos", digit1.parse_to::<u32>())).parse_next(input)?;
    match (signature, position) {
        (Some(signature), Some(position)) => Ok(SignatureSlot::Multi {
            signature,
            position,
        }),
        (signature, None) => Ok(SignatureSlot::Legacy {
            signature: signature.unwrap_or(1),
        }),
        (None, Some(_)) => Err(winnow::error::ErrMode::Backtrack(
            winnow::error::ContextError::new(),
        )),
    }
}
