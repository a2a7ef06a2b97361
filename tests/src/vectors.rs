//! Interoperability vectors
//!
//! Captured from an OpenSSH server: its `ssh-dss` host key blob and a
//! signature blob it sent, in the algorithm-name envelope. The data the
//! server signed (the exchange hash) was not captured, so the signature can
//! only be checked for well-formedness, not for validity.

use dsswire::api::Result;
use dsswire::sign::traditional::dsa::backend::signing_key_from_secret;

/// `string "ssh-dss" | mpint p | mpint q | mpint g | mpint y`
pub const SSH_DSS_HOST_KEY: &str = concat!(
    "000000077373682d6473730000008100e29892e70f3eafba4dc396f00a10",
    "afd43649eeceb20b386277741c1a6cddfc68e6aded7675083e1ba42197d9",
    "80a07e080153214dc472fb861e7d80c6b3628311c1bed7016e9a16e407d0",
    "949542f380ee36c3244f413e9e0de4d8e22faa062f93d347d855077ea80a",
    "a0aa143f9719546fbdd4081dbab3f6c3da61308de64f3efb0000001500b2",
    "45cf1945af96a978a26ec88b949c58d59d4e9700000081009544a23c239e",
    "113853aeb3c51a7d3cc4d364982daf491d408b16bc97e0d1bcaa48a08f6d",
    "5bfa8acc120832593576aa9c1d4de4fabefdede11cd6f06625795173869e",
    "9ddcb75ed3b9b89760bffb9cb115e58365f87acc978dac9a674e6f83ea13",
    "064db3a07319f912460c976755029f1501b8a43c7550ab635b4da90bf51c",
    "33a90000008006407bc387fd96e269addcd91b0da7a50fb6d3842e38ac74",
    "dbdfcf09ded98b7e458aebe629ca5e59c0a4b57ecb13dfc06e88b9a0785d",
    "767f9e6df530521dce6fff80c8fc0fcef532c6643d0a7316b8477813d905",
    "f746d7f5221f5b2e12d5cc184b6910ee87eeaf1c45ba7227e23cb68780d6",
    "d04ad58c1cfd8532990bb9f15800",
);

/// `string "ssh-dss" | string (r || s)`
pub const SSH_DSS_SIGNATURE: &str = concat!(
    "00000007",
    "7373682d647373",
    "00000028",
    "5849017d595062f0ee727cb30de45580fc39c329",
    "006d0e59539e7775fbe9da43a6126459f5ca5670",
);

/// Secret exponent used to sign test data over the host key's domain parameters
pub const TEST_SECRET_X: &str = "1234567890abcdef1234567890abcdef12345678";

pub fn host_key_blob() -> Vec<u8> {
    hex::decode(SSH_DSS_HOST_KEY).expect("valid hex")
}

pub fn signature_blob() -> Vec<u8> {
    hex::decode(SSH_DSS_SIGNATURE).expect("valid hex")
}

/// The 40-byte wire signature inside [`SSH_DSS_SIGNATURE`]
pub fn raw_signature() -> Vec<u8> {
    signature_blob()[15..].to_vec()
}

/// Signing key with secret [`TEST_SECRET_X`] over the host key's p, q, g
pub fn test_signing_key() -> Result<dsa::SigningKey> {
    let verifying_key = dsswire::sign::traditional::dsa::backend::verifying_key_from_ssh_blob(
        &host_key_blob(),
    )?;
    let x = dsa::BigUint::from_bytes_be(&hex::decode(TEST_SECRET_X).expect("valid hex"));
    signing_key_from_secret(verifying_key.components().clone(), x)
}

/// Public half of [`test_signing_key`]
pub fn test_verifying_key() -> Result<dsa::VerifyingKey> {
    Ok(test_signing_key()?.verifying_key().clone())
}
