//! Working with Value at runtime.
//!
//! Run with: cargo run --example dynamic_values

use serde_dsv::{keyed_records, parse_table, Kind, Value};
use std::collections::HashMap;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = "'host','port','ratio'\n'alpha',8080,0.75\n'beta',0x1F90,\n'gamma',n/a,1.";
    let table = parse_table(input);

    // Count inferred kinds per column
    let mut kinds: HashMap<(usize, Kind), usize> = HashMap::new();
    for record in table.iter().skip(1) {
        for (column, value) in record.iter().enumerate() {
            *kinds.entry((column, value.kind())).or_default() += 1;
        }
    }
    let mut summary: Vec<_> = kinds.into_iter().collect();
    summary.sort_by_key(|((column, kind), _)| (*column, kind.as_str()));
    println!("Kinds per column:");
    for ((column, kind), count) in summary {
        println!("  column {}: {} x{}", column, kind, count);
    }

    // Access by header name
    println!("\nPorts:");
    for row in keyed_records(table)? {
        let host = row.get("host").and_then(Value::as_str).unwrap_or("?");
        match row.get("port").and_then(Value::as_i64) {
            Some(port) => println!("  {} -> {}", host, port),
            None => println!("  {} -> (not an integer)", host),
        }
    }

    // Values serialize with serde
    let value = Value::from(Some(2.5));
    println!("\nAs JSON-able value: {:?} (is_number: {})", value, value.is_number());

    Ok(())
}
