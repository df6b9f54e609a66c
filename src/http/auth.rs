//! Basic-Auth credential derivation.

const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Base64 with the standard alphabet and `=` padding, no line wrapping.
///
/// Output length is `ceil(n/3) * 4` for input length `n`.
pub fn base64_encode(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len().div_ceil(3) * 4);

    for group in input.chunks(3) {
        let b0 = group[0] as u32;
        let b1 = group.get(1).copied().unwrap_or(0) as u32;
        let b2 = group.get(2).copied().unwrap_or(0) as u32;
        let n = (b0 << 16) | (b1 << 8) | b2;

        out.push(TABLE[(n >> 18) as usize & 0x3f] as char);
        out.push(TABLE[(n >> 12) as usize & 0x3f] as char);
        out.push(if group.len() > 1 {
            TABLE[(n >> 6) as usize & 0x3f] as char
        } else {
            '='
        });
        out.push(if group.len() > 2 {
            TABLE[n as usize & 0x3f] as char
        } else {
            '='
        });
    }

    out
}

/// Credentials for an `Authorization: Basic` header.
///
/// Present when either part is present; a missing part is treated as the
/// empty string, so the encoded value is always `base64("user:password")`.
pub fn basic_credentials(user: Option<&str>, password: Option<&str>) -> Option<String> {
    if user.is_none() && password.is_none() {
        return None;
    }

    let raw = format!("{}:{}", user.unwrap_or(""), password.unwrap_or(""));
    Some(base64_encode(raw.as_bytes()))
}
