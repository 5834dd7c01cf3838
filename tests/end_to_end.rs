// tests/end_to_end.rs
//! Issuance through proof verification, using the library the way the
//! binaries do.

use ark_bw6_761::BW6_761;
use ark_groth16::ProvingKey;
use bls_vc::models::credential::CredentialDocument;
use bls_vc::models::points::G1Point;
use bls_vc::models::proof_bundle::ProofBundle;
use bls_vc::models::witness::PerFieldWitness;
use bls_vc::services::credential_issuer::CredentialIssuer;
use bls_vc::services::verifier::ProofVerifier;
use bls_vc::utils::crypto::hash_to_g1;
use bls_vc::wallet::bls_signature;
use bls_vc::wallet::key_management::IssuerKeyPair;
use bls_vc::zkp::proof_generation::{encode_verifying_key, prove, setup};
use bls_vc::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::fs;
use std::sync::OnceLock;

/// Groth16 parameters are expensive over BW6-761; generate them once.
fn parameters() -> &'static (ProvingKey<BW6_761>, String) {
    static PARAMS: OnceLock<(ProvingKey<BW6_761>, String)> = OnceLock::new();
    PARAMS.get_or_init(|| {
        let (pk, vk) = setup(&mut StdRng::seed_from_u64(7)).unwrap();
        let pinned = encode_verifying_key(&vk).unwrap();
        (pk, pinned)
    })
}

fn issue_alice(dir: &std::path::Path) -> (IssuerKeyPair, CredentialDocument) {
    let key_path = dir.join("issuer.key");
    let unsigned_path = dir.join("alice.json");
    fs::write(
        &unsigned_path,
        json!({
            "verifiableCredential": {
                "credentialSubject": {"name": "Alice"}
            }
        })
        .to_string(),
    )
    .unwrap();

    let keypair = IssuerKeyPair::load_or_create(&key_path).unwrap();
    let issuer = CredentialIssuer::new(keypair.clone(), "did:example:ToyBLSIssuer");
    let (signed_path, issuance) = issuer.issue_file(&unsigned_path).unwrap();
    assert!(issuance.unverified_fields.is_empty());

    let signed = CredentialDocument::from_json(&fs::read(signed_path).unwrap()).unwrap();
    (keypair, signed)
}

fn alice_witness() -> PerFieldWitness {
    let dir = tempfile::tempdir().unwrap();
    let (_, signed) = issue_alice(dir.path());
    signed.verifiable_credential.field_witness("name").unwrap()
}

#[test]
fn test_issued_witness_verifies_against_issuer_key() {
    let dir = tempfile::tempdir().unwrap();
    let (keypair, signed) = issue_alice(dir.path());
    let vc = &signed.verifiable_credential;

    let issuer_pk = vc.issuer_pub_key.as_ref().unwrap().to_affine().unwrap();
    assert_eq!(issuer_pk, keypair.public_key);

    let witness = vc.field_witness("name").unwrap();
    let sig = witness.sig.to_affine().unwrap();
    assert!(bls_signature::verify(&issuer_pk, b"name: Alice", &sig).unwrap());
    assert!(!bls_signature::verify(&issuer_pk, b"name: Bob", &sig).unwrap());

    // Reusing the key file yields the same issuer.
    let reloaded = IssuerKeyPair::load_or_create(dir.path().join("issuer.key")).unwrap();
    assert_eq!(reloaded.public_key, issuer_pk);
}

#[test]
fn test_valid_proof_is_accepted() {
    let (pk, pinned) = parameters();
    let bundle = prove(pk, &alice_witness(), &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(&bundle.verification_key.verifying_key, pinned);
    assert!(bundle.public.get("Sig").is_none());

    ProofVerifier::new(pinned.clone()).verify(&bundle).unwrap();
}

#[test]
fn test_bundle_file_round_trip() {
    let (pk, pinned) = parameters();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bundle.json");

    prove(pk, &alice_witness(), &mut StdRng::seed_from_u64(7))
        .unwrap()
        .write_to(&path)
        .unwrap();
    ProofVerifier::new(pinned.clone()).verify_file(&path).unwrap();
}

#[test]
fn test_any_flipped_proof_bit_is_rejected() {
    let (pk, pinned) = parameters();
    let bundle = prove(pk, &alice_witness(), &mut StdRng::seed_from_u64(7)).unwrap();
    let verifier = ProofVerifier::new(pinned.clone());
    let bytes = base64::decode(&bundle.proof.proof).unwrap();
    let total_bits = bytes.len() * 8;

    for bit in [0, 7, 300, 767, 768, 1200, 1536, total_bits - 1] {
        let mut flipped = bytes.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);
        let mut tampered = bundle.clone();
        tampered.proof.proof = base64::encode(&flipped);
        assert!(verifier.verify(&tampered).is_err(), "bit {} was accepted", bit);
    }
}

#[test]
fn test_valid_proof_under_unpinned_key_is_refused() {
    let (pk, _) = parameters();
    let bundle = prove(pk, &alice_witness(), &mut StdRng::seed_from_u64(7)).unwrap();

    // The proof verifies under its own key, but that key is not trusted here.
    let err = ProofVerifier::new("b3RoZXIta2V5").verify(&bundle).unwrap_err();
    assert!(matches!(err, Error::UntrustedVerificationKey));
}

#[test]
fn test_swapped_public_input_is_rejected() {
    let (pk, pinned) = parameters();
    let mut bundle: ProofBundle = prove(pk, &alice_witness(), &mut StdRng::seed_from_u64(7)).unwrap();
    bundle.public["Hm"] = serde_json::to_value(G1Point::from(&hash_to_g1(b"name: Bob").unwrap())).unwrap();

    let err = ProofVerifier::new(pinned.clone()).verify(&bundle).unwrap_err();
    assert!(matches!(err, Error::ProofRejected));
}

#[test]
fn test_witness_for_wrong_message_cannot_be_proven() {
    let (pk, _) = parameters();
    let mut witness = alice_witness();
    witness.hm = G1Point::from(&hash_to_g1(b"name: Bob").unwrap());
    assert!(matches!(
        prove(pk, &witness, &mut StdRng::seed_from_u64(7)),
        Err(Error::Pairing(_))
    ));
}
