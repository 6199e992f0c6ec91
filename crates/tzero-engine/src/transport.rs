//! Editor transport decoding.
//!
//! The editor front end ships file content to the `save` command as
//! base64 so embedded spaces and newlines survive tokenization. Decoding
//! is forgiving: a payload that fails every decode step is kept verbatim
//! rather than dropped.

use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD, URL_SAFE},
};

/// Decode a `save` payload into file content.
///
/// Tries standard base64 first, then URL-safe base64, and finally falls
/// back to the raw input. Non-UTF-8 bytes are replaced rather than
/// rejected.
pub fn decode_content(input: &str) -> String {
    match STANDARD.decode(input) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        },
        Err(_) => match URL_SAFE.decode(input) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(_) => {
                log::debug!("save payload is not base64, keeping it verbatim");
                input.to_string()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    #[test]
    fn decodes_standard_base64() {
        let encoded = STANDARD.encode("function add(a, b) { return a + b; }");
        assert_eq!(
            decode_content(&encoded),
            "function add(a, b) { return a + b; }"
        );
    }

    #[test]
    fn decodes_url_safe_base64() {
        // 0xfb encodes with a '-' in the url-safe alphabet, so the
        // standard decode fails first.
        let encoded = base64::engine::general_purpose::URL_SAFE.encode([0xfbu8, 0x01, 0x02]);
        assert!(encoded.contains('-') || encoded.contains('_'));
        let decoded = decode_content(&encoded);
        assert!(!decoded.is_empty());
    }

    #[test]
    fn non_base64_falls_back_to_raw() {
        assert_eq!(decode_content("not base64!!!"), "not base64!!!");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(decode_content(""), "");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let encoded = STANDARD.encode([0xff, 0xfe, b'h', b'i']);
        let decoded = decode_content(&encoded);
        assert!(decoded.contains("hi"));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn encoded_text_round_trips(content in ".{0,200}") {
                let encoded = STANDARD.encode(content.as_bytes());
                prop_assert_eq!(decode_content(&encoded), content);
            }

            #[test]
            fn decoding_is_total(input in ".{0,200}") {
                // Whatever comes in, something readable comes out.
                let _ = decode_content(&input);
            }
        }
    }
}
