#![cfg(feature = "cli")]

use anyhow::Result;
use clap::Parser;
use snb_storefront::app::commands::run_command;
use snb_storefront::{CliConfig, ProductId, StoreConfig, StoreError, Storefront};
use std::io::Cursor;

type CliOutput = std::result::Result<String, StoreError>;

fn run_cli(args: &[&str]) -> (Storefront<StoreConfig>, CliOutput) {
    let cli = CliConfig::try_parse_from(args).expect("valid command line");
    let mut store = Storefront::from_config(StoreConfig::default());
    let mut out = Vec::new();

    let result = run_command(&mut store, cli.command(), cli.json, Cursor::new(""), &mut out)
        .map(|_| String::from_utf8(out).expect("utf-8 output"));
    (store, result)
}

#[test]
fn test_list_with_search_prints_matching_products() -> Result<()> {
    let (_, output) = run_cli(&["snb-storefront", "list", "--search", "item #2"]);
    let output = output?;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("#2 "));
    assert!(lines[0].contains("SweatNBlood Item #2"));
    assert!(lines[0].contains("$   39.99"));
    assert!(lines[1].contains("SweatNBlood Item #20"));
    Ok(())
}

#[test]
fn test_list_without_match_says_so() -> Result<()> {
    let (_, output) = run_cli(&["snb-storefront", "list", "-s", "hoodie"]);
    assert_eq!(output?, "No products match your search.\n");
    Ok(())
}

#[test]
fn test_list_json_is_an_array_of_products() -> Result<()> {
    let (_, output) = run_cli(&["snb-storefront", "--json", "list", "--search", "#1"]);
    let products: serde_json::Value = serde_json::from_str(&output?)?;

    let products = products.as_array().expect("array");
    assert_eq!(products.len(), 11);
    assert_eq!(products[0]["id"], 1);
    assert_eq!(products[0]["price"], "29.99");
    Ok(())
}

#[test]
fn test_checkout_prints_cart_and_links() -> Result<()> {
    let (store, output) = run_cli(&["snb-storefront", "checkout", "-a", "1,1,2"]);
    let output = output?;

    assert!(store.is_cart_open());
    assert!(output.contains("Your Cart"));
    assert!(output.contains("2 × $29.99"));
    assert!(output.contains("1 × $39.99"));
    assert!(output.contains("Total: $99.97"));
    assert!(output.contains("amount=99.97"));
    assert!(output.contains("https://wa.me/237XXXXXXXXX?text="));
    Ok(())
}

#[test]
fn test_checkout_unknown_product_exits_with_code_two() {
    let (store, output) = run_cli(&["snb-storefront", "checkout", "--add", "1,99"]);

    let err = output.unwrap_err();
    assert!(matches!(err, StoreError::UnknownProduct { id: 99 }));
    assert_eq!(err.exit_code(), 2);
    // 錯誤之前加入的商品仍在車內
    assert_eq!(store.cart().line(ProductId(1)).map(|l| l.quantity), Some(1));
}

#[test]
fn test_shell_command_reads_from_input() -> Result<()> {
    let cli = CliConfig::try_parse_from(["snb-storefront", "shell"])?;
    let mut store = Storefront::from_config(StoreConfig::default());
    let mut out = Vec::new();

    let input = Cursor::new("add 3\nquit\n");
    run_command(&mut store, cli.command(), cli.json, input, &mut out)?;

    assert_eq!(store.cart().line_count(), 1);
    assert!(String::from_utf8(out)?.contains("Goodbye from SweatNBlood!"));
    Ok(())
}
