use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, TimeDelta, TimeZone, Utc};
use graphson::{decode, encode, GraphSONError, GraphValue, LineString, Point, Polygon};
use serde_json::json;
use uuid::Uuid;

fn roundtrip(value: GraphValue) -> GraphValue {
    let wire = encode(&value).unwrap();
    decode(&wire).unwrap()
}

#[test]
fn scalar_encode_matrix() {
    let uuid = Uuid::parse_str("41d2e28a-20a4-4ab0-b379-d810dede3786").unwrap();
    let cases = [
        (GraphValue::Integer(7), json!({"@type": "g:Int32", "@value": 7})),
        (GraphValue::Integer(2_147_483_647), json!({"@type": "g:Int32", "@value": 2147483647})),
        (GraphValue::Integer(2_147_483_648), json!({"@type": "g:Int64", "@value": 2147483648i64})),
        (GraphValue::Int64(7), json!({"@type": "g:Int64", "@value": 7})),
        (GraphValue::Int16(7), json!({"@type": "g:Int32", "@value": 7})),
        (GraphValue::Float(1.5), json!({"@type": "g:Float", "@value": 1.5})),
        (GraphValue::Float(0.1), json!({"@type": "g:Float", "@value": 0.1})),
        (GraphValue::Double(-0.25), json!({"@type": "g:Double", "@value": -0.25})),
        (GraphValue::Uuid(uuid), json!({"@type": "g:UUID", "@value": "41d2e28a-20a4-4ab0-b379-d810dede3786"})),
        (
            GraphValue::Decimal(BigDecimal::from_str("1.10").unwrap()),
            json!({"@type": "gx:BigDecimal", "@value": "1.10"}),
        ),
        (
            GraphValue::Instant(Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap()),
            json!({"@type": "gx:Instant", "@value": "2016-01-01T00:00:00Z"}),
        ),
        (
            GraphValue::Duration(TimeDelta::hours(5)),
            json!({"@type": "gx:Duration", "@value": "PT5H"}),
        ),
        (GraphValue::Blob(vec![0xde, 0xad, 0xbe, 0xef]), json!({"@type": "dse:Blob", "@value": "3q2+7w=="})),
        (
            GraphValue::Point(Point::new(38.0, 21.0)),
            json!({"@type": "dse:Point", "@value": "POINT (38.0 21.0)"}),
        ),
        (
            GraphValue::Point(Point::new(f64::INFINITY, 1.0)),
            json!({"@type": "dse:Point", "@value": "POINT (inf 1.0)"}),
        ),
        (GraphValue::Bool(true), json!(true)),
        (GraphValue::Null, json!(null)),
        (GraphValue::from("text"), json!("text")),
    ];
    for (value, expected) in cases {
        assert_eq!(encode(&value).unwrap(), expected, "{value:?}");
    }
}

#[test]
fn encoding_is_deterministic() {
    let value = GraphValue::List(vec![
        GraphValue::Integer(1 << 40),
        GraphValue::Duration(TimeDelta::milliseconds(1_500)),
        GraphValue::Blob(b"abc".to_vec()),
    ]);
    assert_eq!(encode(&value).unwrap(), encode(&value).unwrap());
}

#[test]
fn scalar_roundtrip_boundaries() {
    let epoch_midnight = Utc.with_ymd_and_hms(2020, 2, 29, 0, 0, 0).unwrap();
    let cases = [
        GraphValue::Int32(i32::MAX),
        GraphValue::Int32(i32::MIN),
        GraphValue::Int64(i64::MAX),
        GraphValue::Int64(i64::MIN),
        GraphValue::Double(f64::MAX),
        GraphValue::Float(f32::MIN_POSITIVE),
        GraphValue::Float(0.1),
        GraphValue::Uuid(Uuid::nil()),
        GraphValue::Decimal(BigDecimal::from_str("-12345678901234567890.000000001").unwrap()),
        GraphValue::Instant(epoch_midnight),
        GraphValue::Instant(epoch_midnight + TimeDelta::microseconds(1)),
        GraphValue::Duration(TimeDelta::zero()),
        GraphValue::Duration(-TimeDelta::seconds(86_401)),
        GraphValue::Blob(Vec::new()),
        GraphValue::Point(Point::new(-0.5, 1e-7)),
        GraphValue::Point(Point::new(f64::NEG_INFINITY, f64::INFINITY)),
        GraphValue::LineString(LineString::new(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)])),
        GraphValue::Polygon(Polygon::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 0.0),
            ],
            Vec::new(),
        )),
    ];
    for value in cases {
        assert_eq!(roundtrip(value.clone()), value);
    }
}

#[test]
fn integer_tie_break_decodes_to_tagged_width() {
    assert_eq!(roundtrip(GraphValue::Integer(2_147_483_647)), GraphValue::Int32(i32::MAX));
    assert_eq!(
        roundtrip(GraphValue::Integer(2_147_483_648)),
        GraphValue::Int64(2_147_483_648)
    );
    assert_eq!(roundtrip(GraphValue::Integer(-2_147_483_649)).as_i64(), Some(-2_147_483_649));
}

#[test]
fn date_decodes_as_midnight_instant() {
    let date = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
    assert_eq!(
        roundtrip(GraphValue::Date(date)),
        GraphValue::Instant(Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap())
    );
}

#[test]
fn instant_decode_accepts_both_precisions() {
    let fine = decode(&json!({"@type": "gx:Instant", "@value": "2016-01-01T00:00:00.123456Z"})).unwrap();
    let whole = decode(&json!({"@type": "gx:Instant", "@value": "2016-01-01T00:00:00Z"})).unwrap();
    assert!(matches!(fine, GraphValue::Instant(_)));
    assert!(matches!(whole, GraphValue::Instant(_)));
    assert_ne!(fine, whole);

    for bad in ["2016-01-01T00:00:00", "2016-13-01T00:00:00Z", "01/01/2016"] {
        let err = decode(&json!({"@type": "gx:Instant", "@value": bad})).unwrap_err();
        assert!(matches!(err, GraphSONError::Parse { .. }), "{bad}");
    }
}

#[test]
fn decode_only_tags() {
    assert_eq!(
        decode(&json!({"@type": "gx:Int16", "@value": -12})).unwrap(),
        GraphValue::Int16(-12)
    );
    assert_eq!(
        decode(&json!({"@type": "gx:BigInteger", "@value": 123456789012i64})).unwrap(),
        GraphValue::Int64(123_456_789_012)
    );
    assert_eq!(
        decode(&json!({"@type": "gx:InetAddress", "@value": "10.0.0.1"})).unwrap(),
        GraphValue::from("10.0.0.1")
    );
}

#[test]
fn malformed_payload_matrix() {
    let cases = [
        json!({"@type": "g:UUID", "@value": "41d2e28a"}),
        json!({"@type": "g:Int32", "@value": "7"}),
        json!({"@type": "g:Int32", "@value": 4294967296i64}),
        json!({"@type": "gx:BigDecimal", "@value": "ten"}),
        json!({"@type": "gx:Duration", "@value": "P1M"}),
        json!({"@type": "dse:Blob", "@value": "%%%"}),
        json!({"@type": "dse:Point", "@value": "POINT (1)"}),
        json!({"@type": "dse:Polygon", "@value": 5}),
    ];
    for record in cases {
        match decode(&record) {
            Err(GraphSONError::Parse { tag, .. }) => assert_eq!(record["@type"], tag),
            other => panic!("{record}: {other:?}"),
        }
    }
}

#[test]
fn unsupported_types() {
    let err = decode(&json!({"@type": "x:Bogus", "@value": 1})).unwrap_err();
    assert!(matches!(err, GraphSONError::UnsupportedType(ref t) if t == "x:Bogus"));
    assert_eq!(err.to_string(), "unsupported type: x:Bogus");

    let vertex = GraphValue::from(graphson::Vertex::new(GraphValue::Int32(1), "person"));
    assert!(matches!(encode(&vertex), Err(GraphSONError::UnsupportedType(_))));
}
