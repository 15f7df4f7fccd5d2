use parcel_macros::entity_id;
use std::collections::HashSet;

#[entity_id]
struct ParcelNumber(i64);

#[entity_id]
#[derive(Default)]
struct ClientId(i64);

fn main() {
    let n = ParcelNumber::new(7);
    assert_eq!(n.value(), 7);
    assert_eq!(n.to_string(), "7");
    assert_eq!(" 7 ".parse::<ParcelNumber>().unwrap(), n);
    assert!("seven".parse::<ParcelNumber>().is_err());

    // Copy + Ord
    let m = n;
    assert!(ParcelNumber::from(8_i64) > m);
    let raw: i64 = m.into();
    assert_eq!(raw, 7);

    // 已有 derive 与必需派生合并
    let c = ClientId::default();
    let mut set = HashSet::new();
    set.insert(c);
    assert!(set.contains(&ClientId::new(0)));

    // 透明序列化
    assert_eq!(serde_json::to_string(&n).unwrap(), "7");
    let back: ParcelNumber = serde_json::from_str("42").unwrap();
    assert_eq!(back, ParcelNumber::new(42));
}
