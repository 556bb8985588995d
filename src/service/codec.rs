use std::fmt::Write;
use crate::service::error::CodecError;

/// 將碼位轉為不補零的二進位字串，例如 65 -> "1000001"
pub fn encode_char(code_point: u32) -> Result<String, CodecError> {
    let mut binary = String::with_capacity(21);
    write!(binary, "{:b}", code_point).map_err(|_| CodecError::Encode(code_point))?;
    Ok(binary)
}

/// 將二進位 token 解析為字元
///
/// token 只能包含 `0` 和 `1`，數值必須是合法的 Unicode 碼位（代理區碼位不接受）。
pub fn decode_token(token: &str) -> Result<char, CodecError> {
    if token.is_empty() {
        return Err(CodecError::EmptyToken);
    }
    // from_str_radix 會接受開頭的 '+'，需先自行檢查
    if !token.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(CodecError::InvalidDigit(token.to_string()));
    }
    let value = u32::from_str_radix(token, 2).map_err(|_| CodecError::Overflow(token.to_string()))?;
    char::from_u32(value).ok_or(CodecError::InvalidCodePoint(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_unpadded_binary() {
        assert_eq!(encode_char('A' as u32).unwrap(), "1000001");
        assert_eq!(encode_char('a' as u32).unwrap(), "1100001");
        assert_eq!(encode_char(0).unwrap(), "0");
        assert_eq!(encode_char('€' as u32).unwrap(), "10000010101100");
        assert_eq!(encode_char(0x1F600).unwrap(), "11111011000000000");
    }

    #[test]
    fn decodes_valid_tokens() {
        assert_eq!(decode_token("1001000"), Ok('H'));
        assert_eq!(decode_token("0001101001"), Ok('i'));
        assert_eq!(decode_token("11111011000000000"), Ok('😀'));
    }

    #[test]
    fn rejects_empty_token() {
        assert_eq!(decode_token(""), Err(CodecError::EmptyToken));
    }

    #[test]
    fn rejects_non_binary_digits() {
        assert!(matches!(decode_token("!!"), Err(CodecError::InvalidDigit(_))));
        assert!(matches!(decode_token("102"), Err(CodecError::InvalidDigit(_))));
        assert!(matches!(decode_token("+101"), Err(CodecError::InvalidDigit(_))));
        assert!(matches!(decode_token("-1"), Err(CodecError::InvalidDigit(_))));
    }

    #[test]
    fn rejects_values_outside_char_range() {
        let too_long = "1".repeat(40);
        assert!(matches!(decode_token(&too_long), Err(CodecError::Overflow(_))));
        // 0xD800 代理區
        assert_eq!(decode_token("1101100000000000"), Err(CodecError::InvalidCodePoint(0xD800)));
        // 0x110000
        assert_eq!(
            decode_token("100010000000000000000"),
            Err(CodecError::InvalidCodePoint(0x110000))
        );
    }

    #[test]
    fn every_char_survives_encode_then_decode() {
        for c in ['\0', ' ', '\t', 'Z', 'é', '中', '\u{FEFF}', '\u{10FFFF}'] {
            let binary = encode_char(c as u32).unwrap();
            assert_eq!(decode_token(&binary), Ok(c));
        }
    }
}
