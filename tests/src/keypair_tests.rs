use assert_matches::assert_matches;
use badge_minter_client::{load_keypair, MinterError, KEYPAIR_LENGTH};
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

use crate::helpers::{stage_fixture, stage_keypair_file};

#[test]
fn loads_keypair_from_json_byte_array() {
    let keypair = Keypair::new();
    let path = stage_keypair_file("valid.json", &keypair);

    let loaded = load_keypair(&path).unwrap();

    assert_eq!(loaded.pubkey(), keypair.pubkey());
}

#[test]
fn missing_file_is_a_file_error() {
    let result = load_keypair("configs/keypairs/does-not-exist.json");

    assert_matches!(result, Err(MinterError::KeypairFile { .. }));
}

#[test]
fn non_json_contents_is_a_format_error() {
    let path = stage_fixture("not-json.json", "definitely not a byte array");

    assert_matches!(load_keypair(&path), Err(MinterError::KeypairFormat { .. }));
}

#[test]
fn out_of_range_integers_are_a_format_error() {
    let path = stage_fixture("out-of-range.json", "[300, 1, 2]");

    assert_matches!(load_keypair(&path), Err(MinterError::KeypairFormat { .. }));
}

#[test]
fn short_byte_array_is_a_length_error() {
    let bytes = vec![1u8; KEYPAIR_LENGTH - 1];
    let path = stage_fixture("short.json", &serde_json::to_string(&bytes).unwrap());

    assert_matches!(
        load_keypair(&path),
        Err(MinterError::KeypairLength { len: 63, .. })
    );
}

#[test]
fn long_byte_array_is_a_length_error_not_a_truncation() {
    let mut bytes = Keypair::new().to_bytes().to_vec();
    bytes.push(0);
    let path = stage_fixture("long.json", &serde_json::to_string(&bytes).unwrap());

    assert_matches!(
        load_keypair(&path),
        Err(MinterError::KeypairLength { len: 65, .. })
    );
}

#[test]
fn mismatched_key_halves_are_rejected() {
    let mut bytes = Keypair::new().to_bytes().to_vec();
    let other = Keypair::new().to_bytes();
    bytes[32..].copy_from_slice(&other[32..]);
    let path = stage_fixture("mismatched.json", &serde_json::to_string(&bytes).unwrap());

    assert_matches!(load_keypair(&path), Err(MinterError::InvalidKeypair { .. }));
}
