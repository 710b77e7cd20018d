//! Unit conversion and market capitalization through the client.


use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use binding::token::ERC20;
use setup::mock_token;
use std::str::FromStr;
use token::{TokenError, UnitsError};

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

#[tokio::test]
async fn test_market_cap_with_known_supply() {
    let token = mock_token();

    let cap = token.market_cap(&dec("2"), Some(U256::from(1000))).await.unwrap();
    assert_eq!(cap, dec("2000"));

    let cap = token.market_cap(&dec("2"), Some(U256::ZERO)).await.unwrap();
    assert_eq!(cap, dec("0"));

    assert_eq!(token.runtime().invocations(), 0);
}

#[tokio::test]
async fn test_market_cap_reads_live_supply() {
    let token = mock_token();
    token
        .runtime()
        .respond_uint::<ERC20::totalSupplyCall>(U256::from(1000));
    token.runtime().respond_uint::<ERC20::decimalsCall>(U256::from(18));

    let cap = token.market_cap_display(&dec("2"), None).await.unwrap();
    assert_eq!(cap, dec("0.000000000000002"));

    token.market_cap(&dec("2"), None).await.unwrap();
    assert_eq!(token.runtime().reads_of::<ERC20::totalSupplyCall>(), 2);
}

#[tokio::test]
async fn test_market_cap_base() {
    let token = mock_token();
    token.runtime().respond_uint::<ERC20::decimalsCall>(U256::from(6));

    let cap = token
        .market_cap_base(&dec("2"), Some(U256::from(1000)))
        .await
        .unwrap();
    assert_eq!(cap, U256::from(2_000_000_000u64));

    // 0.5 * 3 = 1.5, scaled by 10^6
    let cap = token
        .market_cap_base(&dec("0.5"), Some(U256::from(3)))
        .await
        .unwrap();
    assert_eq!(cap, U256::from(1_500_000u64));
}

#[tokio::test]
async fn test_market_cap_base_truncates() {
    let token = mock_token();
    token.runtime().respond_uint::<ERC20::decimalsCall>(U256::ZERO);

    let cap = token
        .market_cap_base(&dec("0.5"), Some(U256::from(3)))
        .await
        .unwrap();
    assert_eq!(cap, U256::from(1));
}

#[tokio::test]
async fn test_negative_price_rejected() {
    let token = mock_token();
    token.runtime().respond_uint::<ERC20::decimalsCall>(U256::from(18));

    let err = token
        .market_cap_base(&dec("-1"), Some(U256::from(1)))
        .await
        .unwrap_err();
    assert!(matches!(err, TokenError::Units(UnitsError::Negative(_))));
}

#[tokio::test]
async fn test_to_base_units_uses_token_decimals() {
    let token = mock_token();
    token.runtime().respond_uint::<ERC20::decimalsCall>(U256::from(18));

    let amount = token.to_base_units(&dec("1.5")).await.unwrap();
    assert_eq!(amount, U256::from(1_500_000_000_000_000_000u128));

    let display = token.to_display_units(amount).await.unwrap();
    assert_eq!(display, dec("1.5"));

    assert_eq!(token.runtime().reads_of::<ERC20::decimalsCall>(), 1);
}

#[tokio::test]
async fn test_display_round_trip_across_decimals() {
    for decimals in [0u8, 6, 8, 18] {
        let token = mock_token();
        token
            .runtime()
            .respond_uint::<ERC20::decimalsCall>(U256::from(decimals));

        let raw = U256::from(123_456_789u64);
        let display = token.to_display_units(raw).await.unwrap();
        assert_eq!(token.to_base_units(&display).await.unwrap(), raw, "decimals {decimals}");
    }
}

#[tokio::test]
async fn test_excess_precision_truncated() {
    let token = mock_token();
    token.runtime().respond_uint::<ERC20::decimalsCall>(U256::from(6));

    let amount = token.to_base_units(&dec("1.2345679")).await.unwrap();
    assert_eq!(amount, U256::from(1_234_567u64));
}

#[tokio::test]
async fn test_conversion_fails_without_decimals() {
    let token = mock_token();

    let err = token.to_base_units(&dec("1")).await.unwrap_err();
    assert!(matches!(err, TokenError::Execution { method: "decimals", .. }));
}
