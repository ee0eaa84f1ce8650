//! End-to-end tests: genesis loading, header fields and chain growth

use sa_core::block::{BlockHeaderInfo, HeaderError};
use sa_core::chain::{BlockChain, ChainState};
use sa_core::crypto::{sha3, EMPTY_LIST_HASH, EMPTY_TRIE_HASH};
use sa_core::node::{load_genesis, load_genesis_from_path, GenesisError, GenesisInfo};
use sa_core::rlp::{decode_ip4_bytes, encode_element, encode_list, full_traverse, RlpItem};

fn fixture_path() -> String {
    format!("{}/tests/fixtures/genesis.json", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_empty_hashes() {
    assert_eq!(*EMPTY_LIST_HASH, sha3(&[0xc0]));
    assert_eq!(*EMPTY_TRIE_HASH, sha3(&[0x80]));
    assert_eq!(
        EMPTY_LIST_HASH.to_hex(),
        "1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347"
    );
    assert_eq!(
        EMPTY_TRIE_HASH.to_hex(),
        "56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421"
    );
}

#[test]
fn test_nonce_padding() {
    let mut info = BlockHeaderInfo::new();
    info.set_nonce("0x01").unwrap();
    assert_eq!(info.nonce(), &[0, 0, 0, 0, 0, 0, 0, 1]);

    assert_eq!(
        info.set_nonce("0x010203040506070809"),
        Err(HeaderError::InvalidNonce { length: 9 })
    );
}

#[test]
fn test_timestamp_parse() {
    let mut info = BlockHeaderInfo::new();
    info.set_timestamp("0x000000005a5e5d5d").unwrap();
    assert_eq!(info.timestamp(), 1_516_133_725);

    // Width is checked on the text, so a short timestamp is rejected
    assert!(info.set_timestamp("0x5a5e5d5d").is_err());
}

#[test]
fn test_high_bit_hash_keeps_width() {
    let mut info = BlockHeaderInfo::new();
    let hash = format!("0xff{}", "00".repeat(31));
    info.set_parent_hash(&hash).unwrap();
    assert_eq!(info.parent_hash().len(), 32);
    assert_eq!(info.parent_hash()[0], 0xff);
}

#[test]
fn test_genesis_from_fixture() {
    let genesis = load_genesis_from_path(fixture_path()).unwrap();

    assert_eq!(genesis.number(), 0);
    assert!(genesis.uncles.is_empty());
    assert!(genesis.transactions.is_empty());
    assert_eq!(genesis.header.info().uncles_hash(), EMPTY_LIST_HASH.as_bytes());
    assert_eq!(genesis.header.state_root(), &*EMPTY_TRIE_HASH);

    let info = GenesisInfo::new(&genesis);
    assert_eq!(info.timestamp, 1_516_133_725);
    assert_eq!(info.gas_limit, 4_700_000);
    assert_eq!(info.allocated_accounts, 2);
    assert_eq!(genesis.header.info().mixhash()[0], 0xff);
    assert_eq!(genesis.header.info().difficulty(), &[0x02, 0x00, 0x00]);
}

#[test]
fn test_genesis_encoding_is_header_plus_empty_lists() {
    let genesis = load_genesis_from_path(fixture_path()).unwrap();
    let decoded = RlpItem::decode(&genesis.encode()).unwrap();

    let parts = decoded.as_list().unwrap();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].as_list().unwrap().len(), 13);
    assert_eq!(parts[1], RlpItem::List(vec![]));
    assert_eq!(parts[2], RlpItem::List(vec![]));
    assert_eq!(genesis.hash(), genesis.header.hash());
}

#[test]
fn test_missing_genesis_file() {
    assert!(matches!(
        load_genesis_from_path("tests/fixtures/does-not-exist.json"),
        Err(GenesisError::Io(_))
    ));
}

#[test]
fn test_genesis_from_header_info() {
    let mut info = BlockHeaderInfo::new();
    info.set_gas_limit("0x1388").unwrap();
    let genesis = load_genesis(info);

    assert_eq!(genesis.number(), 0);
    assert!(genesis.uncles.is_empty());
    assert!(genesis.transactions.is_empty());
    assert_eq!(genesis.header.info().uncles_hash(), EMPTY_LIST_HASH.as_bytes());
}

#[test]
fn test_ip4_roundtrip() {
    let octets: Vec<Vec<u8>> = [127u8, 0, 0, 1].iter().map(|b| encode_element(&[*b])).collect();
    let encoded = encode_list(&octets);
    assert_eq!(decode_ip4_bytes(&encoded, 0).unwrap(), [127, 0, 0, 1]);
}

#[test]
fn test_traverse_index_collection() {
    let inner = encode_list(&[encode_element(b"b"), encode_element(b"c")]);
    let encoded = encode_list(&[encode_element(b"a"), inner, encode_element(b"d")]);
    assert_eq!(encoded, vec![0xc5, 0x61, 0xc2, 0x62, 0x63, 0x64]);

    // The outer list occupies depth 0; its payload starts at offset 1
    let mut top = Vec::new();
    full_traverse(&encoded, 1, 1, encoded.len(), 1, &mut top).unwrap();
    assert_eq!(top, vec![1, 2, 5]);

    let mut nested = Vec::new();
    full_traverse(&encoded, 1, 1, encoded.len(), 2, &mut nested).unwrap();
    assert_eq!(nested, vec![3, 4]);
}

#[test]
fn test_chain_grows_from_genesis() {
    let genesis = load_genesis_from_path(fixture_path()).unwrap().into_block();
    let mut state = ChainState::new(genesis.clone());

    for expected in 1..=3u64 {
        let parent = state.best_block().clone();
        let child = state.create_new_block(&parent, None, None).unwrap();
        assert_eq!(child.number(), expected);
        assert_eq!(child.header.info().parent_hash(), parent.hash().as_bytes());
        assert!(child.header.info().alloc().is_empty());
        state.apply_block(child).unwrap();
    }

    assert_eq!(state.height, 3);
    assert_eq!(state.block_count(), 4);
    assert_eq!(state.get_height(&genesis.hash()), Some(0));
}
