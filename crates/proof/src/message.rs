use percent_encoding::percent_decode_str;

/// Builds the canonical byte string a WOPI host re-derives to check a
/// proof signature:
///
/// `[i32 len(token)] [token] [i32 len(uri)] [uri] [i32 = 8] [i64 ticks]`
///
/// All integers big-endian. The access token is percent-decoded to raw
/// bytes first; the URI is framed as given. The constant `8` before the
/// tick value is redundant but part of the canonical stream — verifiers
/// expect it.
///
/// The result contains the bearer token; never log it.
pub fn proof_message(access_token: &str, uri: &str, ticks: i64) -> Vec<u8> {
    let token: Vec<u8> = percent_decode_str(access_token).collect();
    debug_assert!(token.len() <= i32::MAX as usize);
    debug_assert!(uri.len() <= i32::MAX as usize);

    let mut message = Vec::with_capacity(4 + token.len() + 4 + uri.len() + 4 + 8);
    message.extend_from_slice(&(token.len() as i32).to_be_bytes());
    message.extend_from_slice(&token);
    message.extend_from_slice(&(uri.len() as i32).to_be_bytes());
    message.extend_from_slice(uri.as_bytes());
    message.extend_from_slice(&8i32.to_be_bytes());
    message.extend_from_slice(&ticks.to_be_bytes());
    message
}
