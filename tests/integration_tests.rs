use serde::{Deserialize, Serialize};
use serde_dsv::{
    from_str, from_str_with_headers, parse_field, parse_record, parse_table,
    parse_table_with_options, Cursor, Delimiter, Kind, ParseOptions, Value,
};

#[test]
fn test_empty_input_has_no_records() {
    assert!(parse_table("").is_empty());
}

#[test]
fn test_integer_record() {
    let table = parse_table("1,2,3");
    assert_eq!(
        table,
        vec![vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]]
    );
}

#[test]
fn test_float_undefined_null() {
    let table = parse_table("1.5,abc,");
    assert_eq!(
        table,
        vec![vec![Value::Float(1.5), Value::Undefined, Value::Null]]
    );
}

#[test]
fn test_quoted_delimiter() {
    let table = parse_table("\"a,b\",2");
    assert_eq!(
        table,
        vec![vec![Value::String("a,b".to_string()), Value::Integer(2)]]
    );
}

#[test]
fn test_hex_and_decimal() {
    let table = parse_table("0x1F,10");
    assert_eq!(table, vec![vec![Value::Integer(31), Value::Integer(10)]]);
}

#[test]
fn test_only_delimiters() {
    assert_eq!(parse_table(",,"), vec![vec![Value::Null, Value::Null]]);
}

#[test]
fn test_cursor_advances_by_match_length() {
    for (text, len) in [
        ("\"quoted\"", 8),
        ("'x'", 3),
        ("-12.5e-3", 8),
        (".5", 2),
        ("0xDEADbeef", 10),
        ("+42", 3),
    ] {
        let mut cursor = Cursor::new(text);
        let value = parse_field(&mut cursor, ',');
        assert!(!value.is_undefined(), "{text} should lex");
        assert_eq!(cursor.position(), len, "{text}");
    }
}

#[test]
fn test_custom_scan_loop_with_parse_field() {
    // A caller-written loop over a pipe-separated line.
    let line = "1 | 'two' | 3.0";
    let mut cursor = Cursor::new(line);
    let mut kinds = Vec::new();
    while !cursor.is_at_end() {
        let start = cursor.position();
        let value = parse_field(&mut cursor, Delimiter::Pipe);
        kinds.push(value.kind());
        cursor.eat_while(|c| c == ' ');
        assert!(cursor.position() > start);
    }
    assert_eq!(kinds, vec![Kind::Integer, Kind::String, Kind::Float]);
}

#[test]
fn test_escapes_are_not_decoded() {
    let record = parse_record(r#""say \"hi\"",'it\'s'"#, ',');
    assert_eq!(
        record,
        vec![
            Value::String(r#"say \"hi\""#.to_string()),
            Value::String(r"it\'s".to_string()),
        ]
    );
}

#[test]
fn test_multiline_table_keeps_blank_records() {
    let text = "id,value\n1,2.5\n\n2,\n";
    let table = parse_table(text);
    assert_eq!(table.len(), 4);
    assert_eq!(table[0], vec![Value::Undefined, Value::Undefined]);
    assert_eq!(table[1], vec![Value::Integer(1), Value::Float(2.5)]);
    assert!(table[2].is_empty());
    assert_eq!(table[3], vec![Value::Integer(2), Value::Null]);
}

#[test]
fn test_tab_and_booleans() {
    let options = ParseOptions::new()
        .with_delimiter(Delimiter::Tab)
        .with_booleans(true);
    let table = parse_table_with_options("true\t1.0\t'x'\nfalse\t\t", &options);
    assert_eq!(
        table,
        vec![
            vec![Value::Bool(true), Value::Float(1.0), Value::from("x")],
            vec![Value::Bool(false), Value::Null, Value::Null],
        ]
    );
}

#[test]
fn test_table_serializes_to_json() {
    let table = parse_table("1,'a',\n2.5,x");
    let json = serde_json::to_string(&table).unwrap();
    assert_eq!(json, r#"[[1,"a",null],[2.5,null]]"#);
}

#[test]
fn test_value_deserializes_from_json() {
    let values: Vec<Value> = serde_json::from_str(r#"[1, 2.5, "s", null, true]"#).unwrap();
    assert_eq!(
        values,
        vec![
            Value::Integer(1),
            Value::Float(2.5),
            Value::from("s"),
            Value::Null,
            Value::Bool(true),
        ]
    );
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[test]
fn test_products_with_headers() {
    let text = "'sku','price','quantity'\n'WIDGET-001',29.99,2\n'GADGET-002',49.99,1\n";
    let products: Vec<Product> = from_str_with_headers(text).unwrap();
    assert_eq!(
        products,
        vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.99,
                quantity: 1,
            },
        ]
    );
}

#[test]
fn test_products_positional() {
    let products: Vec<Product> = from_str("'A',1.0,3").unwrap();
    assert_eq!(products[0].quantity, 3);
}

#[test]
fn test_undefined_field_fails_typed_read() {
    let result: serde_dsv::Result<Vec<Product>> = from_str("'A',oops,3");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("record 1, field 2"), "{err}");
}
