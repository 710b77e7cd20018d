//! Caching of immutable token metadata.


use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use binding::token::ERC20;
use setup::{mock_token, MockRuntime, TOKEN};
use std::str::FromStr;
use token::{TokenClient, TokenError};

#[tokio::test]
async fn test_metadata_read_once() {
    let token = mock_token();
    token.runtime().respond_string::<ERC20::nameCall>("Uniswap");
    token.runtime().respond_string::<ERC20::symbolCall>("UNI");
    token.runtime().respond_uint::<ERC20::decimalsCall>(U256::from(18));

    for _ in 0..3 {
        assert_eq!(token.name().await.unwrap(), "Uniswap");
        assert_eq!(token.symbol().await.unwrap(), "UNI");
        assert_eq!(token.decimals().await.unwrap(), 18);
    }

    assert_eq!(token.runtime().reads_of::<ERC20::nameCall>(), 1);
    assert_eq!(token.runtime().reads_of::<ERC20::symbolCall>(), 1);
    assert_eq!(token.runtime().reads_of::<ERC20::decimalsCall>(), 1);
}

#[tokio::test]
async fn test_zero_decimals_cached() {
    let token = mock_token();
    token.runtime().respond_uint::<ERC20::decimalsCall>(U256::ZERO);

    assert_eq!(token.decimals().await.unwrap(), 0);
    assert_eq!(token.decimals().await.unwrap(), 0);

    assert_eq!(token.runtime().reads_of::<ERC20::decimalsCall>(), 1);
}

#[tokio::test]
async fn test_empty_name_cached() {
    let token = mock_token();
    token.runtime().respond_string::<ERC20::nameCall>("");

    assert_eq!(token.name().await.unwrap(), "");
    assert_eq!(token.name().await.unwrap(), "");

    assert_eq!(token.runtime().reads_of::<ERC20::nameCall>(), 1);
}

#[tokio::test]
async fn test_concurrent_first_reads() {
    let token = mock_token();
    token.runtime().respond_string::<ERC20::nameCall>("Tether USD");
    token.runtime().respond_string::<ERC20::symbolCall>("USDT");
    token.runtime().respond_uint::<ERC20::decimalsCall>(U256::from(6));

    let (n1, s1, d1, n2, s2, d2, d3) = tokio::join!(
        token.name(),
        token.symbol(),
        token.decimals(),
        token.name(),
        token.symbol(),
        token.decimals(),
        token.decimals(),
    );

    assert_eq!(n1.unwrap(), "Tether USD");
    assert_eq!(n2.unwrap(), "Tether USD");
    assert_eq!(s1.unwrap(), "USDT");
    assert_eq!(s2.unwrap(), "USDT");
    assert_eq!(d1.unwrap(), 6);
    assert_eq!(d2.unwrap(), 6);
    assert_eq!(d3.unwrap(), 6);

    assert_eq!(token.runtime().reads_of::<ERC20::nameCall>(), 1);
    assert_eq!(token.runtime().reads_of::<ERC20::symbolCall>(), 1);
    assert_eq!(token.runtime().reads_of::<ERC20::decimalsCall>(), 1);
}

#[tokio::test]
async fn test_concurrent_reads_across_tasks() {
    let token = std::sync::Arc::new(mock_token());
    token.runtime().respond_uint::<ERC20::decimalsCall>(U256::from(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let token = token.clone();
            tokio::spawn(async move { token.decimals().await.unwrap() })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), 8);
    }

    assert_eq!(token.runtime().reads_of::<ERC20::decimalsCall>(), 1);
}

#[tokio::test]
async fn test_failed_read_not_cached() {
    let token = mock_token();

    let err = token.symbol().await.unwrap_err();
    assert!(matches!(err, TokenError::Execution { method: "symbol", .. }));

    token.runtime().respond_string::<ERC20::symbolCall>("DAI");
    assert_eq!(token.symbol().await.unwrap(), "DAI");
    assert_eq!(token.symbol().await.unwrap(), "DAI");

    assert_eq!(token.runtime().reads_of::<ERC20::symbolCall>(), 2);
}

#[tokio::test]
async fn test_decode_error() {
    let token = mock_token();
    token
        .runtime()
        .respond::<ERC20::decimalsCall>(vec![0x01, 0x02]);

    let err = token.decimals().await.unwrap_err();
    assert!(matches!(err, TokenError::Decode { method: "decimals", .. }));
}

#[tokio::test]
async fn test_decimals_out_of_range() {
    let token = mock_token();
    token.runtime().respond_uint::<ERC20::decimalsCall>(U256::from(300));

    let err = token.decimals().await.unwrap_err();
    assert!(matches!(err, TokenError::Decode { method: "decimals", .. }));

    // nothing cached, nothing converted
    assert!(token.to_base_units(&BigDecimal::from(1)).await.is_err());
    assert_eq!(token.runtime().reads_of::<ERC20::decimalsCall>(), 2);
}

#[tokio::test]
async fn test_info_reads_live_supply() {
    let token = mock_token();
    token.runtime().respond_string::<ERC20::nameCall>("Wrapped Ether");
    token.runtime().respond_string::<ERC20::symbolCall>("WETH");
    token.runtime().respond_uint::<ERC20::decimalsCall>(U256::from(18));
    token
        .runtime()
        .respond_uint::<ERC20::totalSupplyCall>(U256::from(2_500_000_000_000_000_000u128));

    let info = token.info().await.unwrap();
    assert_eq!(info.address, token.address());
    assert_eq!(info.name, "Wrapped Ether");
    assert_eq!(info.symbol, "WETH");
    assert_eq!(info.decimals, 18);
    assert_eq!(info.total_supply, U256::from(2_500_000_000_000_000_000u128));
    assert_eq!(info.total_supply_display(), BigDecimal::from_str("2.5").unwrap());

    token.info().await.unwrap();
    assert_eq!(token.runtime().reads_of::<ERC20::totalSupplyCall>(), 2);
    assert_eq!(token.runtime().reads_of::<ERC20::decimalsCall>(), 1);
}

#[tokio::test]
async fn test_descriptors_do_not_execute() {
    let token = TokenClient::new(MockRuntime::new(), TOKEN).unwrap();

    let name = token.name_descriptor();
    let symbol = token.symbol_descriptor();
    let decimals = token.decimals_descriptor();

    assert_eq!(name.signature(), "name()");
    assert_eq!(symbol.signature(), "symbol()");
    assert_eq!(decimals.signature(), "decimals()");
    assert_eq!(decimals.to(), token.address());
    assert_eq!(token.runtime().invocations(), 0);
}
