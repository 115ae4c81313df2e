use committee::{
    combine, committee_root, hash_leaf, merkle_root, pubkeys_root, CommitteeRecord, MerkleError,
    Pubkey, COMMITTEE_CAPACITY, PUBKEY_LEN,
};

fn pk(fill: u8) -> Pubkey {
    Pubkey([fill; PUBKEY_LEN])
}

/// A small committee with distinguishable members.
fn record(n: usize) -> CommitteeRecord {
    let pubkeys = (0..n)
        .map(|i| {
            let mut raw = [0u8; PUBKEY_LEN];
            raw[0] = 0xc0;
            raw[1] = (i >> 8) as u8;
            raw[2] = (i & 0xff) as u8;
            Pubkey(raw)
        })
        .collect();
    CommitteeRecord {
        pubkeys,
        aggregate_pubkey: pk(0xaa),
    }
}

#[test]
fn matches_independent_recomposition() {
    // Two real members at capacity 512; the remaining 510 slots are padded
    // inside the tree, not by dummy keys.
    let rec = CommitteeRecord {
        pubkeys: vec![pk(0x01), pk(0x02)],
        aggregate_pubkey: pk(0xaa),
    };

    let leaves = vec![
        hash_leaf(pk(0x01).as_bytes(), PUBKEY_LEN).unwrap(),
        hash_leaf(pk(0x02).as_bytes(), PUBKEY_LEN).unwrap(),
    ];
    let expected = combine(
        &merkle_root(&leaves, COMMITTEE_CAPACITY).unwrap(),
        &hash_leaf(pk(0xaa).as_bytes(), PUBKEY_LEN).unwrap(),
    );

    assert_eq!(*committee_root(&rec).unwrap().as_bytes(), expected);
}

#[test]
fn root_is_deterministic() {
    let rec = record(7);
    assert_eq!(
        committee_root(&rec).unwrap(),
        committee_root(&rec.clone()).unwrap()
    );
}

#[test]
fn single_byte_change_moves_the_root() {
    let rec = record(7);
    let base = committee_root(&rec).unwrap();

    let mut tampered = rec.clone();
    tampered.pubkeys[3].0[17] ^= 0x01;
    assert_ne!(committee_root(&tampered).unwrap(), base);

    let mut tampered_agg = rec;
    tampered_agg.aggregate_pubkey.0[0] ^= 0x01;
    assert_ne!(committee_root(&tampered_agg).unwrap(), base);
}

#[test]
fn member_order_is_committed() {
    let rec = record(7);
    let mut swapped = rec.clone();
    swapped.pubkeys.swap(1, 5);

    assert_ne!(
        pubkeys_root(&swapped.pubkeys).unwrap(),
        pubkeys_root(&rec.pubkeys).unwrap()
    );
    assert_ne!(
        committee_root(&swapped).unwrap(),
        committee_root(&rec).unwrap()
    );
}

#[test]
fn field_operand_order_is_fixed() {
    let rec = record(7);
    let vector_root = pubkeys_root(&rec.pubkeys).unwrap();
    let agg_leaf = hash_leaf(rec.aggregate_pubkey.as_bytes(), PUBKEY_LEN).unwrap();
    assert_ne!(vector_root, agg_leaf);

    assert_eq!(
        *committee_root(&rec).unwrap().as_bytes(),
        combine(&vector_root, &agg_leaf)
    );
    assert_ne!(
        combine(&vector_root, &agg_leaf),
        combine(&agg_leaf, &vector_root)
    );
}

#[test]
fn full_committee_is_accepted() {
    let rec = record(COMMITTEE_CAPACITY);
    assert!(committee_root(&rec).is_ok());
}

#[test]
fn over_capacity_committee_is_rejected() {
    let rec = record(COMMITTEE_CAPACITY + 1);
    assert_eq!(
        committee_root(&rec).unwrap_err(),
        MerkleError::CapacityExceeded {
            supplied: 513,
            capacity: 512
        }
    );
}

#[test]
fn empty_committee_still_has_a_root() {
    // Zero members is not an error at capacity 512: the vector root is the
    // root of an all-zero tree.
    let rec = CommitteeRecord {
        pubkeys: Vec::new(),
        aggregate_pubkey: pk(0xaa),
    };
    let expected = combine(
        &merkle_root(&[], COMMITTEE_CAPACITY).unwrap(),
        &hash_leaf(pk(0xaa).as_bytes(), PUBKEY_LEN).unwrap(),
    );
    assert_eq!(*committee_root(&rec).unwrap().as_bytes(), expected);
}
