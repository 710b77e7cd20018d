//! Reads against a live node.
//!
//! Run with:
//! ```bash
//! RPC_URL=https://ethereum-sepolia-rpc.publicnode.com cargo test --package erc20 --test live -- --ignored
//! ```


use alloy_primitives::Address;
use setup::live_weth;

#[tokio::test]
#[ignore = "requires RPC_URL"]
async fn test_weth_info() {
    let weth = live_weth().await;

    let info = weth.info().await.expect("Failed to read token info");
    println!("✓ {} ({})", info.name, info.symbol);
    println!("  Decimals: {}", info.decimals);
    println!("  Total supply: {}", info.total_supply_display());

    assert_eq!(info.symbol, "WETH");
    assert_eq!(info.decimals, 18);

    // served from the cache the second time
    assert_eq!(weth.symbol().await.unwrap(), "WETH");
}

#[tokio::test]
#[ignore = "requires RPC_URL"]
async fn test_weth_balance_of_zero_address() {
    let weth = live_weth().await;

    let balance = weth
        .balance_of(Address::ZERO)
        .await
        .expect("Failed to read balance");
    println!("✓ Zero address holds {} base units", balance);
}
