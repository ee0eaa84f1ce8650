//! Property-based and adversarial tests for the RLP codec
//!
//! These tests verify invariants hold under random inputs and malformed buffers.

use num_bigint::BigUint;
use proptest::prelude::*;
use sa_core::crypto::sha3;
use sa_core::rlp::{
    calc_length, command_code, decode_big_integer, decode_int, decode_ip4_bytes,
    decode_item_bytes, decode_long, decode_short, decode_string, encode_big_uint, encode_element,
    encode_list, encode_list_header, encode_str, encode_u64, first_list_element, full_traverse,
    item_header, next_element_index, next_item_length, RlpError, RlpItem, OFFSET_SHORT_ITEM,
};

fn arb_item() -> impl Strategy<Value = RlpItem> {
    let leaf = prop::collection::vec(any::<u8>(), 0..80).prop_map(RlpItem::Bytes);
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(RlpItem::List)
    })
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

proptest! {
    /// Any byte string decodes back to itself
    #[test]
    fn prop_element_roundtrip(data in prop::collection::vec(any::<u8>(), 0..300)) {
        let encoded = encode_element(&data);
        prop_assert_eq!(decode_item_bytes(&encoded, 0)?, data.clone());

        let header = item_header(&encoded, 0)?;
        prop_assert!(!header.is_list);
        prop_assert_eq!(header.total_length(), encoded.len());
    }

    /// The list header only depends on the payload size
    #[test]
    fn prop_list_header_matches_payload(
        elements in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..40), 0..10)
    ) {
        let encoded: Vec<Vec<u8>> = elements.iter().map(|e| encode_element(e)).collect();
        let payload: usize = encoded.iter().map(Vec::len).sum();
        let list = encode_list(&encoded);

        let header = encode_list_header(payload);
        prop_assert_eq!(list, [header, encoded.concat()].concat());
    }

    /// Unsigned integers roundtrip at their width
    #[test]
    fn prop_long_roundtrip(value in any::<u64>()) {
        prop_assert_eq!(decode_long(&encode_u64(value), 0)?, value);
    }

    #[test]
    fn prop_int_roundtrip(value in any::<u32>()) {
        prop_assert_eq!(decode_int(&encode_u64(value as u64), 0)?, value);
    }

    #[test]
    fn prop_short_roundtrip(value in any::<u16>()) {
        prop_assert_eq!(decode_short(&encode_u64(value as u64), 0)?, value);
    }

    /// Integers wider than the target type are rejected
    #[test]
    fn prop_int_rejects_wide_values(value in (u32::MAX as u64 + 1)..=u64::MAX) {
        let encoded = encode_u64(value);
        let is_wrong_decode = matches!(decode_int(&encoded, 0), Err(RlpError::WrongDecode { .. }));
        prop_assert!(is_wrong_decode);
    }

    /// Integers are minimal: never a leading zero byte
    #[test]
    fn prop_integer_encoding_is_minimal(value in 1u64..) {
        let encoded = encode_u64(value);
        if encoded[0] > OFFSET_SHORT_ITEM {
            prop_assert_ne!(encoded[1], 0);
        }
    }

    #[test]
    fn prop_big_uint_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let value = BigUint::from_bytes_be(&bytes);
        prop_assert_eq!(decode_big_integer(&encode_big_uint(&value), 0)?, value);
    }

    #[test]
    fn prop_string_roundtrip(value in "\\PC{0,80}") {
        prop_assert_eq!(decode_string(&encode_str(&value), 0)?, value);
    }

    /// Nested item trees roundtrip through the wire format
    #[test]
    fn prop_item_roundtrip(item in arb_item()) {
        let encoded = item.encode();
        prop_assert_eq!(RlpItem::decode(&encoded)?, item);
    }

    /// Long lengths with a zero leading byte are never accepted
    #[test]
    fn prop_length_leading_zero_rejected(rest in prop::collection::vec(any::<u8>(), 0..7)) {
        let mut data = vec![0xb8 + rest.len() as u8, 0x00];
        data.extend_from_slice(&rest);
        let result = calc_length(rest.len() + 1, &data, 0);
        prop_assert_eq!(result, Err(RlpError::LengthLeadingZeros { index: 0 }));
    }

    /// Decoding arbitrary bytes never panics
    #[test]
    fn prop_decode_garbage_never_panics(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = RlpItem::decode(&data);
        let _ = decode_item_bytes(&data, 0);
        let _ = decode_long(&data, 0);
        let _ = decode_int(&data, 0);
        let _ = decode_short(&data, 0);
        let _ = decode_ip4_bytes(&data, 0);
        let _ = command_code(&data);

        let mut sink = Vec::new();
        for level in 0..3 {
            let _ = full_traverse(&data, 0, 0, data.len(), level, &mut sink);
        }
        for pos in 0..=data.len() {
            let _ = next_item_length(&data, pos);
            let _ = next_element_index(&data, pos);
            let _ = first_list_element(&data, pos);
        }
    }

    /// Hashing is deterministic and sensitive to every byte
    #[test]
    fn prop_sha3_deterministic(data in prop::collection::vec(any::<u8>(), 1..100), flip in any::<usize>()) {
        prop_assert_eq!(sha3(&data), sha3(&data));

        let mut changed = data.clone();
        let index = flip % changed.len();
        changed[index] ^= 0x01;
        prop_assert_ne!(sha3(&data), sha3(&changed));
    }
}

// ============================================================================
// ADVERSARIAL TESTS
// ============================================================================

#[test]
fn test_zero_byte_is_not_a_number() {
    assert_eq!(decode_long(&[0x00], 0), Err(RlpError::NotANumber { index: 0 }));
    assert_eq!(decode_int(&[0x00], 0), Err(RlpError::NotANumber { index: 0 }));
    assert_eq!(decode_short(&[0x00], 0), Err(RlpError::NotANumber { index: 0 }));
}

#[test]
fn test_size_threshold_boundary() {
    let short = encode_element(&[0xaa; 55]);
    assert_eq!(short[0], 0xb7);
    assert_eq!(short.len(), 56);

    let long = encode_element(&[0xaa; 56]);
    assert_eq!(&long[..2], &[0xb8, 56]);
    assert_eq!(long.len(), 58);

    assert_eq!(encode_list_header(55), vec![0xf7]);
    assert_eq!(encode_list_header(56), vec![0xf8, 56]);
    assert_eq!(encode_list_header(1024), vec![0xf9, 0x04, 0x00]);
}

#[test]
fn test_single_byte_boundary() {
    assert_eq!(encode_element(&[0x7f]), vec![0x7f]);
    assert_eq!(encode_element(&[0x80]), vec![0x81, 0x80]);
    assert_eq!(encode_element(&[]), vec![0x80]);
}

#[test]
fn test_truncated_payload() {
    assert!(matches!(
        decode_item_bytes(&[0x83, b'd', b'o'], 0),
        Err(RlpError::EndOfBuffer { .. })
    ));
    assert!(matches!(
        RlpItem::decode(&[0xc3, 0x01, 0x02]),
        Err(RlpError::EndOfBuffer { .. })
    ));
}

#[test]
fn test_huge_length_is_oversize() {
    let data = [0xbf, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
    assert_eq!(decode_item_bytes(&data, 0), Err(RlpError::Oversize { index: 0 }));
}

#[test]
fn test_trailing_bytes_rejected() {
    assert!(matches!(
        RlpItem::decode(&[0x01, 0x02]),
        Err(RlpError::TrailingBytes(_))
    ));
}
