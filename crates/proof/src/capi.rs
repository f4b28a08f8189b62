/*!
    CAPI RSA1 public-key blob encoding.

    Layout (all multi-byte fields little-endian):
    - 12-byte fixed header: blob type 0x06, version 0x02, two reserved
      zero bytes, ALG_ID 0x0000A400 (CALG_RSA_KEYX), magic `RSA1`
    - key size in bits (u32)
    - public exponent, reversed from big-endian
    - modulus, reversed from big-endian

    Verifiers in the consuming ecosystem parse this byte-for-byte; any
    deviation breaks signature checks remotely with no local symptom.
*/

const CAPI_HEADER: [u8; 12] = [
    0x06, 0x02, 0x00, 0x00, //
    0x00, 0xA4, 0x00, 0x00, //
    0x52, 0x53, 0x41, 0x31, // "RSA1"
];

/// Reverses a big-endian byte string into little-endian order.
pub fn to_little_endian(bytes_be: &[u8]) -> Vec<u8> {
    bytes_be.iter().rev().copied().collect()
}

/// Encodes an RSA public key (big-endian modulus and exponent) as a
/// CAPI public-key blob.
pub fn rsa_capi_blob(modulus_be: &[u8], exponent_be: &[u8]) -> Vec<u8> {
    let mut blob =
        Vec::with_capacity(CAPI_HEADER.len() + 4 + exponent_be.len() + modulus_be.len());
    blob.extend_from_slice(&CAPI_HEADER);
    blob.extend_from_slice(&((modulus_be.len() as u32) * 8).to_le_bytes());
    blob.extend_from_slice(&to_little_endian(exponent_be));
    blob.extend_from_slice(&to_little_endian(modulus_be));
    blob
}
