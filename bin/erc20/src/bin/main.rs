use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use clap::Parser;
use erc20::{
    cli::{Cli, Command, WriteArgs},
    settings::{Overrides, Settings},
    Amount,
};
use eyre::{eyre, Result};
use std::str::FromStr;
use token::{ContractRuntime, TokenClient};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(
        cli.config.as_deref(),
        Overrides {
            rpc_url: cli.rpc_url.clone(),
            network: cli.network,
            token: cli.token.clone(),
            timeout_secs: cli.timeout_secs,
        },
    )?;

    let token_address = settings.token_address()?;
    info!(rpc_url = %settings.rpc_url, token = %token_address, "Connecting");

    let provider = client::create_provider(&settings.rpc_url, settings.request_timeout)?;
    let runtime = client::RpcRuntime::connect(provider).await?;
    info!(chain_id = runtime.chain_id(), "Connected");

    let mut token = TokenClient::new(runtime, token_address)?;
    if let Some(signer) = settings.signer(cli.private_key.as_deref())? {
        info!(from = %signer.address(), "Using signer");
        token = token.with_signer(signer);
    }

    run(&token, cli.command).await
}

async fn run<R>(token: &TokenClient<R>, command: Command) -> Result<()>
where
    R: ContractRuntime,
{
    match command {
        Command::Info { json } => {
            let info = token.info().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Address:      {}", info.address);
                println!("Name:         {}", info.name);
                println!("Symbol:       {}", info.symbol);
                println!("Decimals:     {}", info.decimals);
                println!(
                    "Total supply: {} ({} base units)",
                    info.total_supply_display(),
                    info.total_supply
                );
            }
        }
        Command::Balance { holder } => {
            let balance = token.balance_of(holder.as_str()).await?;
            print_amount(token, balance).await?;
        }
        Command::Allowance { owner, spender } => {
            let allowance = token.allowance(owner.as_str(), spender.as_str()).await?;
            print_amount(token, allowance).await?;
        }
        Command::Owner => {
            println!("{}", token.owner().await?);
        }
        Command::MarketCap { price, supply } => {
            let price = BigDecimal::from_str(&price)
                .map_err(|e| eyre!("Invalid price {price:?}: {e}"))?;
            let supply = supply
                .map(|s| U256::from_str(&s).map_err(|e| eyre!("Invalid supply {s:?}: {e}")))
                .transpose()?;

            let cap = token.market_cap_display(&price, supply).await?;
            println!("{cap}");
        }
        Command::Transfer {
            recipient,
            amount,
            write,
        } => {
            let amount = base_units(token, &amount, &write).await?;
            let tx_hash = token
                .transfer(recipient.as_str(), amount, write.transaction_parameters())
                .await?;
            println!("{tx_hash}");
        }
        Command::Approve {
            spender,
            amount,
            write,
        } => {
            let amount = base_units(token, &amount, &write).await?;
            let tx_hash = token
                .approve(spender.as_str(), amount, write.transaction_parameters())
                .await?;
            println!("{tx_hash}");
        }
        Command::TransferFrom {
            sender,
            recipient,
            amount,
            write,
        } => {
            let amount = base_units(token, &amount, &write).await?;
            let tx_hash = token
                .transfer_from(
                    sender.as_str(),
                    recipient.as_str(),
                    amount,
                    write.transaction_parameters(),
                )
                .await?;
            println!("{tx_hash}");
        }
        Command::IncreaseAllowance {
            spender,
            amount,
            write,
        } => {
            let amount = base_units(token, &amount, &write).await?;
            let tx_hash = token
                .increase_allowance(spender.as_str(), amount, write.transaction_parameters())
                .await?;
            println!("{tx_hash}");
        }
        Command::DecreaseAllowance {
            spender,
            amount,
            write,
        } => {
            let amount = base_units(token, &amount, &write).await?;
            let tx_hash = token
                .decrease_allowance(spender.as_str(), amount, write.transaction_parameters())
                .await?;
            println!("{tx_hash}");
        }
        Command::RenounceOwnership { write } => {
            let tx_hash = token
                .renounce_ownership(write.transaction_parameters())
                .await?;
            println!("{tx_hash}");
        }
        Command::TransferOwnership { new_owner, write } => {
            let tx_hash = token
                .transfer_ownership(new_owner.as_str(), write.transaction_parameters())
                .await?;
            println!("{tx_hash}");
        }
    }

    Ok(())
}

async fn base_units<R>(token: &TokenClient<R>, input: &str, write: &WriteArgs) -> Result<U256>
where
    R: ContractRuntime,
{
    let amount = Amount::parse(input, write.raw)?;
    Ok(amount.to_base_units(token).await?)
}

async fn print_amount<R>(token: &TokenClient<R>, amount: U256) -> Result<()>
where
    R: ContractRuntime,
{
    let display = token.to_display_units(amount).await?;
    let symbol = token.symbol().await?;
    println!("{display} {symbol} ({amount} base units)");
    Ok(())
}
