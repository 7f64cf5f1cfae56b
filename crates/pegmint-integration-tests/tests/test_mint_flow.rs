//! End-to-end mint flow through the full stack: decoder, registry,
//! ledger, verifier, token, and audit log.

use pegmint_core::{
    encode_public_values, ProgramKey, ProofFingerprint, Recipient, SourceTxId,
};
use pegmint_gateway::{
    InMemoryToken, MintError, MintGateway, MintGatewayConfig, MintRequest,
};
use pegmint_ledger::issuance::DEFAULT_CAP;
use pegmint_verify::AcceptAllVerifier;

const COIN: u64 = 100_000_000;

fn recipient(byte: u8) -> Recipient {
    Recipient::from_bytes([byte; 20])
}

fn txid(byte: u8) -> SourceTxId {
    SourceTxId::from_bytes([byte; 32])
}

fn gateway(cap: u64) -> MintGateway<AcceptAllVerifier, InMemoryToken> {
    MintGateway::new(
        MintGatewayConfig {
            cap,
            program_key: ProgramKey::from_bytes([0xaa; 32]),
        },
        AcceptAllVerifier,
        InMemoryToken::new("pBTC"),
    )
}

fn request(to: Recipient, tx: SourceTxId, amount: u64, proof: &[u8]) -> MintRequest {
    MintRequest {
        recipient: to,
        source_tx_id: tx,
        public_values: encode_public_values(b"deposit", amount),
        proof_bytes: proof.to_vec(),
    }
}

#[test]
fn idempotence_identical_request_mints_once() {
    let gw = gateway(DEFAULT_CAP);
    let req = request(recipient(1), txid(1), 5 * COIN, b"proof-a");

    let receipt = gw.mint(req.clone()).expect("first mint succeeds");
    let err = gw.mint(req).expect_err("replay must fail");

    assert_eq!(err, MintError::AlreadyUsed(receipt.fingerprint));
    assert_eq!(gw.total_issued(), 5 * COIN);
    assert_eq!(gw.token().total_supply(), 5 * COIN);
    assert_eq!(gw.audit_log().len(), 1);
}

#[test]
fn same_source_tx_distinct_proofs_accumulate() {
    let gw = gateway(DEFAULT_CAP);
    gw.mint(request(recipient(1), txid(1), 3 * COIN, b"proof-a"))
        .unwrap();
    gw.mint(request(recipient(2), txid(1), 4 * COIN, b"proof-b"))
        .unwrap();

    assert_eq!(gw.issued_for(&txid(1)), 7 * COIN);
    assert_eq!(gw.total_issued(), 7 * COIN);
    assert_eq!(gw.token().balance_of(&recipient(1)), 3 * COIN);
    assert_eq!(gw.token().balance_of(&recipient(2)), 4 * COIN);
}

#[test]
fn cap_boundary_reaches_exactly_and_then_rejects() {
    let gw = gateway(DEFAULT_CAP);
    gw.mint(request(recipient(1), txid(1), 20_000_000 * COIN, b"proof-a"))
        .unwrap();
    gw.mint(request(recipient(1), txid(2), 1_000_000 * COIN, b"proof-b"))
        .unwrap();
    assert_eq!(gw.total_issued(), DEFAULT_CAP);

    let err = gw
        .mint(request(recipient(1), txid(3), 1, b"proof-c"))
        .unwrap_err();
    assert_eq!(
        err,
        MintError::CapExceeded {
            requested: 1,
            total_issued: DEFAULT_CAP,
            cap: DEFAULT_CAP,
        }
    );
    assert_eq!(gw.total_issued(), DEFAULT_CAP);
}

#[test]
fn minimal_payload_single_byte_reference_amount_one() {
    let gw = gateway(DEFAULT_CAP);
    let req = MintRequest {
        recipient: recipient(1),
        source_tx_id: txid(1),
        public_values: encode_public_values(&[0x42], 1),
        proof_bytes: b"proof".to_vec(),
    };
    assert_eq!(req.public_values.len(), 17);

    let receipt = gw.mint(req).unwrap();
    assert_eq!(receipt.amount, 1);
    assert_eq!(gw.total_issued(), 1);
}

#[test]
fn ten_byte_payload_rejected_as_zero_amount() {
    let gw = gateway(DEFAULT_CAP);
    let req = MintRequest {
        recipient: recipient(1),
        source_tx_id: txid(1),
        public_values: vec![0xffu8; 10],
        proof_bytes: b"proof".to_vec(),
    };
    assert_eq!(gw.mint(req).unwrap_err(), MintError::ZeroAmount);
    assert_eq!(gw.total_issued(), 0);
    assert!(gw.audit_log().is_empty());
}

#[test]
fn rejection_leaves_all_state_untouched() {
    let gw = gateway(10 * COIN);
    gw.mint(request(recipient(1), txid(1), 6 * COIN, b"proof-a"))
        .unwrap();

    let before_info = gw.ledger_info();
    let before_audit = gw.audit_log();

    // Cap rejection.
    gw.mint(request(recipient(2), txid(2), 5 * COIN, b"proof-b"))
        .unwrap_err();
    // Replay rejection.
    gw.mint(request(recipient(1), txid(1), 6 * COIN, b"proof-a"))
        .unwrap_err();

    assert_eq!(gw.ledger_info(), before_info);
    assert_eq!(gw.audit_log(), before_audit);
    assert_eq!(gw.token().total_supply(), 6 * COIN);
    let rejected_fp = ProofFingerprint::compute(
        &txid(2),
        &encode_public_values(b"deposit", 5 * COIN),
        b"proof-b",
    );
    assert!(!gw.is_fingerprint_used(&rejected_fp));
}

#[test]
fn receipts_carry_queryable_fingerprints() {
    let gw = gateway(DEFAULT_CAP);
    let r1 = gw
        .mint(request(recipient(1), txid(1), COIN, b"proof-a"))
        .unwrap();
    let r2 = gw
        .mint(request(recipient(1), txid(2), COIN, b"proof-b"))
        .unwrap();

    assert_ne!(r1.fingerprint, r2.fingerprint);
    assert!(gw.is_fingerprint_used(&r1.fingerprint));
    assert!(gw.is_fingerprint_used(&r2.fingerprint));
    assert_eq!(gw.audit_log(), vec![r1, r2]);
}

#[test]
fn ledger_info_reflects_collaborators() {
    let gw = gateway(DEFAULT_CAP);
    let info = gw.ledger_info();
    assert_eq!(info.cap, DEFAULT_CAP);
    assert_eq!(info.total_issued, 0);
    assert_eq!(info.token, "pBTC");
    assert_eq!(info.verifier, "accept-all");
    assert_eq!(info.program_key, ProgramKey::from_bytes([0xaa; 32]));
}
