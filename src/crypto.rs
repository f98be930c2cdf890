//! Signature recovery for withdrawal authorizations.
//!
//! All signing-scheme specifics live behind `recover_signer`, keeping the
//! vault logic independent of the curve library. Signatures are 65-byte
//! `r || s || v` blobs as produced by standard wallet tooling.

use alloy_primitives::{keccak256, Address, B256};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

/// Signature length: r (32) || s (32) || recovery byte (1).
pub const SIGNATURE_LEN: usize = 65;

/// Recover the signing address from a signature over `digest`.
///
/// The recovery byte accepts both raw (`0`/`1`) and offset (`27`/`28`)
/// encodings. Returns `None` on any malformed input: wrong length, an
/// out-of-range recovery byte, or r/s values that do not describe a point
/// on the curve.
pub fn recover_signer(digest: B256, signature: &[u8]) -> Option<Address> {
    if signature.len() != SIGNATURE_LEN {
        return None;
    }
    let v = signature[64];
    let recovery_byte = match v {
        0 | 1 => v,
        27 | 28 => v - 27,
        _ => return None,
    };
    let recovery_id = RecoveryId::from_byte(recovery_byte)?;
    let sig = Signature::from_slice(&signature[..64]).ok()?;
    let key = VerifyingKey::recover_from_prehash(digest.as_slice(), &sig, recovery_id).ok()?;
    Some(signer_address(&key))
}

/// Address corresponding to a public key: the trailing 20 bytes of the
/// keccak-256 hash of the uncompressed point, without its format byte.
pub fn signer_address(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::ecdsa::{signature::hazmat::PrehashSigner, SigningKey};

    fn test_key() -> SigningKey {
        // Deterministic seed for repeatable vectors
        let seed: [u8; 32] = [
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, //
            0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x10, //
            0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, //
            0x19, 0x1A, 0x1B, 0x1C, 0x1D, 0x1E, 0x1F, 0x20,
        ];
        SigningKey::from_slice(&seed).expect("valid key seed")
    }

    fn sign_digest(key: &SigningKey, digest: B256) -> Vec<u8> {
        let (sig, recovery_id): (Signature, RecoveryId) =
            key.sign_prehash(digest.as_slice()).expect("sign");
        let mut bytes = sig.to_bytes().to_vec();
        bytes.push(27 + recovery_id.to_byte());
        bytes
    }

    #[test]
    fn test_recover_round_trip() {
        let key = test_key();
        let digest = keccak256(b"withdrawal authorization digest");
        let signature = sign_digest(&key, digest);

        let recovered = recover_signer(digest, &signature).expect("recover");
        assert_eq!(recovered, signer_address(key.verifying_key()));
    }

    #[test]
    fn test_recover_round_trip_random_key() {
        let key = SigningKey::random(&mut rand::rngs::OsRng);
        let digest = keccak256(b"random key round trip");
        let signature = sign_digest(&key, digest);

        let recovered = recover_signer(digest, &signature).expect("recover");
        assert_eq!(recovered, signer_address(key.verifying_key()));
    }

    #[test]
    fn test_recover_accepts_raw_recovery_byte() {
        let key = test_key();
        let digest = keccak256(b"raw recovery byte");
        let mut signature = sign_digest(&key, digest);
        signature[64] -= 27;

        let recovered = recover_signer(digest, &signature).expect("recover");
        assert_eq!(recovered, signer_address(key.verifying_key()));
    }

    #[test]
    fn test_recover_rejects_wrong_length() {
        let digest = keccak256(b"short");
        assert_eq!(recover_signer(digest, &[0u8; 64]), None);
        assert_eq!(recover_signer(digest, &[0u8; 66]), None);
        assert_eq!(recover_signer(digest, b""), None);
    }

    #[test]
    fn test_recover_rejects_bad_recovery_byte() {
        let key = test_key();
        let digest = keccak256(b"bad v");
        let mut signature = sign_digest(&key, digest);
        signature[64] = 5;
        assert_eq!(recover_signer(digest, &signature), None);
    }

    #[test]
    fn test_recover_rejects_garbage_components() {
        let digest = keccak256(b"garbage r and s");
        let mut signature = vec![0xFFu8; 64];
        signature.push(27);
        assert_eq!(recover_signer(digest, &signature), None);
    }

    #[test]
    fn test_flipped_recovery_byte_changes_address() {
        let key = test_key();
        let digest = keccak256(b"forged recovery byte");
        let signature = sign_digest(&key, digest);

        let mut forged = signature.clone();
        forged[64] = if signature[64] == 27 { 28 } else { 27 };

        let valid = recover_signer(digest, &signature).expect("recover valid");
        // Recovery with the wrong parity either fails or yields some other
        // address; it must never yield the true signer.
        if let Some(other) = recover_signer(digest, &forged) {
            assert_ne!(valid, other);
        }
    }

    #[test]
    fn test_different_digest_recovers_different_address() {
        let key = test_key();
        let digest = keccak256(b"original message");
        let signature = sign_digest(&key, digest);

        let tampered = keccak256(b"tampered message");
        let recovered = recover_signer(tampered, &signature);
        assert_ne!(recovered, Some(signer_address(key.verifying_key())));
    }

    #[test]
    fn test_signature_vector_stable() {
        let key = test_key();
        let digest = keccak256(b"deterministic vector");
        // RFC 6979 signing with a fixed key is deterministic
        assert_eq!(sign_digest(&key, digest), sign_digest(&key, digest));
    }
}
