//! Property-based tests for the ssh-dss codec

use dsswire::internal::hex::to_hex;
use dsswire::prelude::*;
use dsswire::sign::der;
use dsswire::sign::envelope::extract;
use proptest::prelude::*;

/// 20-byte components biased towards the interesting first bytes
fn component() -> impl Strategy<Value = [u8; 20]> {
    (
        prop_oneof![Just(0x00u8), Just(0x7F), Just(0x80), Just(0xFF), any::<u8>()],
        any::<[u8; 20]>(),
    )
        .prop_map(|(first, mut rest)| {
            rest[0] = first;
            rest
        })
}

proptest! {
    #[test]
    fn wire_der_wire_roundtrip(r in component(), s in component()) {
        let sig = RawSignature::from_components(r, s);
        let der = sig.to_der();
        prop_assert_eq!(RawSignature::from_der(&der).unwrap(), sig);
    }

    #[test]
    fn der_integers_carry_guard_iff_high_bit(r in component(), s in component()) {
        let der = RawSignature::from_components(r, s).to_der();
        let (dr, ds) = der::parse_sequence_of_two_integers(&der).unwrap();

        for (value, field) in [(dr, r), (ds, s)] {
            if field[0] & 0x80 != 0 {
                prop_assert_eq!(value.len(), 21);
                prop_assert_eq!(value[0], 0x00);
                prop_assert_eq!(&value[1..], &field[..]);
            } else {
                prop_assert_eq!(value, &field[..]);
            }
        }
    }

    #[test]
    fn verify_sees_the_encoded_der(r in component(), s in component()) {
        let sig = RawSignature::from_components(r, s);
        let expected = sig.to_der();
        let ok = DsaSignatureCodec::new()
            .verify(verify_fn(|der: &[u8]| Ok(der == expected.as_slice())), &sig.to_bytes())
            .unwrap();
        prop_assert!(ok);
    }

    #[test]
    fn verify_rejects_wrong_lengths(blob in prop::collection::vec(any::<u8>(), 0..96)) {
        prop_assume!(blob.len() != 40);
        let result = DsaSignatureCodec::new()
            .verify(verify_fn(|_: &[u8]| Ok(true)), &blob);

        match extract(&blob) {
            Some(enc) if enc.key_type == "ssh-dss" && enc.data.len() == 40 => {
                prop_assert_eq!(result, Ok(true));
            }
            Some(enc) if enc.key_type != "ssh-dss" => {
                prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::KeyTypeMismatch);
            }
            _ => {
                prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::LengthMismatch);
            }
        }
    }

    #[test]
    fn extract_stays_in_bounds(blob in prop::collection::vec(any::<u8>(), 0..64)) {
        if let Some(enc) = extract(&blob) {
            let key_len = u32::from_be_bytes([blob[0], blob[1], blob[2], blob[3]]) as usize;
            let start = 8 + key_len;
            prop_assert_eq!(enc.data, &blob[start..start + enc.data.len()]);
        }
    }

    #[test]
    fn hex_has_fixed_shape(bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        let plain = to_hex(&bytes, None);
        let split = to_hex(&bytes, Some(':'));
        prop_assert_eq!(plain.len(), bytes.len() * 2);
        prop_assert_eq!(split.len(), bytes.len() * 3 - 1);
        prop_assert_eq!(split.replace(':', ""), plain);
    }
}
