//! Facade-level tests: prelude, re-exports and feature wiring

use dsswire::params::traditional::dsa::{DSA_SIGNATURE_LENGTH, SSH_DSS};
use dsswire::prelude::*;
use dsswire::sign::{encode_envelope, extract};
use dsswire_tests::vectors;

#[test]
fn test_constants() {
    assert_eq!(SSH_DSS, "ssh-dss");
    assert_eq!(DSA_SIGNATURE_LENGTH, RawSignature::LENGTH);
    assert_eq!(DsaSignatureCodec::default().key_type(), SSH_DSS);
}

#[test]
fn test_vector_envelope() {
    let blob = vectors::signature_blob();
    let enc = extract(&blob).unwrap();
    assert_eq!(enc.key_type, "ssh-dss");
    assert_eq!(enc.data, &vectors::raw_signature()[..]);

    assert_eq!(encode_envelope("ssh-dss", enc.data).unwrap(), blob);
}

#[test]
fn test_vector_decode() {
    let codec = DsaSignatureCodec::new();
    let from_envelope = codec.decode(&vectors::signature_blob()).unwrap();
    let from_raw = codec.decode(&vectors::raw_signature()).unwrap();
    assert_eq!(from_envelope, from_raw);

    // s has a leading zero byte, which survives the DER round trip
    assert_eq!(from_raw.s()[0], 0x00);
    let der = from_raw.to_der();
    assert_eq!(&der[..4], &[0x30, 44, 0x02, 20]);
    assert_eq!(RawSignature::from_der(&der).unwrap(), from_raw);
}

#[test]
fn test_vector_with_mock_engines() {
    let codec = DsaSignatureCodec::new();
    let expected = RawSignature::from_slice(&vectors::raw_signature())
        .unwrap()
        .to_der();

    let seen = std::cell::RefCell::new(Vec::new());
    let ok = codec
        .verify(
            verify_fn(|der: &[u8]| {
                seen.borrow_mut().push(der.to_vec());
                Ok(true)
            }),
            &vectors::signature_blob(),
        )
        .unwrap();
    assert!(ok);
    assert_eq!(seen.borrow().as_slice(), &[expected.clone()]);

    let sig = codec.sign(sign_fn(move || Ok(expected))).unwrap();
    assert_eq!(&sig.to_bytes()[..], &vectors::raw_signature()[..]);
}

#[test]
fn test_error_context() {
    let err: Result<()> = Err(Error::LengthMismatch {
        context: "inner",
        expected: 40,
        actual: 3,
    });
    let err = err.with_context("outer").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthMismatch);
    assert!(err.to_string().contains("outer"));
}

#[test]
fn test_errors_are_std_errors() {
    fn assert_std_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_std_error::<Error>();
}
