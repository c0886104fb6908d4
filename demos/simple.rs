//! Tokenizing delimited text into a typed table.
//!
//! Run with: cargo run --example simple

use serde_dsv::{parse_table, Value};

fn main() {
    let input = "1,2,3\n1.5,abc,\n\"a,b\",0x1F\n\n,,";

    let table = parse_table(input);
    println!("{} records\n", table.len());

    for (index, record) in table.iter().enumerate() {
        let fields: Vec<String> = record
            .iter()
            .map(|value| format!("{:?}({})", value.kind(), value))
            .collect();
        println!("record {}: [{}]", index + 1, fields.join(", "));
    }

    let undefined = table.iter().flatten().filter(|v| v.is_undefined()).count();
    println!("\n{} field(s) could not be classified", undefined);
    assert_eq!(table[2][1], Value::Integer(31));
}
