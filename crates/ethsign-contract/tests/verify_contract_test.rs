//! End-to-end agreement between local verification and the contract path.

use ethsign_contract::{InMemoryVerifier, VerifyContract};
use ethsign_message::{sign, verify, Message};
use ethsign_primitives::address::Address;
use ethsign_primitives::ec::{PrivateKey, Signature};

const DEV_KEY_0: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const DEV_KEY_1: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

fn contract() -> VerifyContract<InMemoryVerifier> {
    // Any address works for the in-memory caller; use a recognizable one.
    let deployed = Address::from_hex("0x00000000000000000000000000000000deadbeef").unwrap();
    VerifyContract::new(deployed, InMemoryVerifier::new())
}

#[test]
fn signer_address_agrees_with_local_recovery() {
    let key = PrivateKey::from_hex(DEV_KEY_0).unwrap();
    let message = Message::new("asdjh1231", key.address(), 1u64);
    let signature = sign(&message, &key).unwrap();

    let from_contract = contract().signer_address(&message, &signature).unwrap();
    let local = verify(&message, &key.address(), &signature).unwrap();

    assert_eq!(from_contract, local.recovered);
    assert_eq!(from_contract, key.address());
}

#[test]
fn match_sender_agrees_with_local_verify() {
    let key = PrivateKey::from_hex(DEV_KEY_0).unwrap();

    // Participant is the signer: both paths report a match.
    let message = Message::new("asdjh1231", key.address(), 1u64);
    let signature = sign(&message, &key).unwrap();

    let on_chain = contract().match_sender(&message, &signature).unwrap();
    let local = verify(&message, &message.participant, &signature).unwrap();
    assert!(on_chain);
    assert_eq!(on_chain, local.matched);
}

#[test]
fn match_sender_rejects_foreign_signer() {
    let participant_key = PrivateKey::from_hex(DEV_KEY_0).unwrap();
    let other_key = PrivateKey::from_hex(DEV_KEY_1).unwrap();

    // Signed by a key that is not the participant.
    let message = Message::new("asdjh1231", participant_key.address(), 1u64);
    let signature = sign(&message, &other_key).unwrap();

    let on_chain = contract().match_sender(&message, &signature).unwrap();
    let local = verify(&message, &message.participant, &signature).unwrap();

    assert!(!on_chain);
    assert_eq!(on_chain, local.matched);
    assert_eq!(local.recovered, other_key.address());
}

#[test]
fn signature_hex_transport_reaches_contract_intact() {
    let key = PrivateKey::from_hex(DEV_KEY_0).unwrap();
    let message = Message::new("asdjh1231", key.address(), 1u64);

    // Hex is the display/wire form; the contract consumes the raw bytes.
    let wire = sign(&message, &key).unwrap().to_hex();
    let signature = Signature::from_hex(&wire).unwrap();

    assert!(contract().match_sender(&message, &signature).unwrap());
}
