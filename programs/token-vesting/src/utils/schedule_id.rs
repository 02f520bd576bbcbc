//! Deterministic schedule ids: blake3 over (beneficiary, per-beneficiary
//! index). Content-addressed, so the same pair always maps to the same id
//! and distinct pairs never collide in practice.

use anchor_lang::prelude::Pubkey;

pub fn derive(beneficiary: &Pubkey, index: u64) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(beneficiary.as_ref());
    hasher.update(&index.to_le_bytes());
    *hasher.finalize().as_bytes()
}
