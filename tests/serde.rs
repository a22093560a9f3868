#![cfg(feature = "serde")]

use zonescan::iana::{Class, Rtype};
use zonescan::zonefile::{Record, RecordReader};

#[test]
fn record_to_json() {
    let mut reader =
        RecordReader::from("a.example. 60 in mx 10 mx.example. ; mail\n");
    let record = reader.next_record().unwrap().unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "owner": "a.example.",
            "ttl": 60,
            "class": "IN",
            "rtype": "MX",
            "data": ["10", "mx.example."],
            "comment": "; mail",
        })
    );
    assert_eq!(serde_json::from_value::<Record>(json).unwrap(), record);
}

#[test]
fn mnemonics() {
    assert_eq!(serde_json::to_string(&Class::ANY).unwrap(), "\"*\"");
    assert_eq!(
        serde_json::from_str::<Class>("\"any\"").unwrap(),
        Class::ANY
    );
    assert_eq!(
        serde_json::from_str::<Rtype>("\"naptr\"").unwrap(),
        Rtype::NAPTR
    );
    assert!(serde_json::from_str::<Rtype>("\"BOGUS\"").is_err());
    assert!(serde_json::from_str::<Class>("1").is_err());
}
