//! Reading records into Rust types.
//!
//! Run with: cargo run --example typed_records

use serde::Deserialize;
use serde_dsv::{from_str, from_str_with_headers};
use std::error::Error;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Deserialize)]
struct Trade {
    symbol: String,
    side: Side,
    qty: u32,
    price: Option<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Positional: each record is a tuple
    let points: Vec<(i64, i64)> = from_str("1,2\n3,4\n0x10,-5")?;
    println!("Points: {:?}\n", points);

    // Header-keyed: the first line names the columns
    let csv = "\
'symbol','side','qty','price'
'AAPL','buy',10,189.5
'MSFT','sell',5,
";
    let trades: Vec<Trade> = from_str_with_headers(csv)?;
    for trade in &trades {
        println!("{:?}", trade);
    }

    let unpriced = trades.iter().filter(|t| t.price.is_none()).count();
    println!("\n{} trade(s) without a price", unpriced);

    // Fields that do not lex fail typed reads with a location
    match from_str::<Vec<(i64, f64)>>("1,2.0\n2,n/a") {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}
