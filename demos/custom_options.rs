//! Customizing parsing with ParseOptions.
//!
//! Run with: cargo run --example custom_options

use serde_dsv::{parse_table, parse_table_with_options, Delimiter, ParseOptions};

fn main() {
    let tsv = "1\t2.5\t'x'\ntrue\t\tfalse";

    // Default options: comma delimiter, so tab-separated fields run together
    println!("Default (comma):");
    println!("{:?}\n", parse_table(tsv));

    // Tab delimiter
    println!("Tab delimiter:");
    let tab_options = ParseOptions::new().with_delimiter(Delimiter::Tab);
    println!("{:?}\n", parse_table_with_options(tsv, &tab_options));

    // Tab delimiter with boolean literals
    println!("Tab delimiter, booleans on:");
    let bool_options = tab_options.with_booleans(true);
    println!("{:?}\n", parse_table_with_options(tsv, &bool_options));

    // Any other character works as a delimiter
    println!("Colon delimiter:");
    let colon_options = ParseOptions::new().with_delimiter(':');
    println!("{:?}", parse_table_with_options("10:20::0x30", &colon_options));
}
