use clap::{Args, Parser, Subcommand};
use config::NetworkType;
use std::path::PathBuf;
use token::TransactionParameters;

#[derive(Debug, Parser)]
#[command(name = "erc20")]
#[command(about = "Query and operate ERC20 tokens")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// RPC endpoint url, overrides the config file
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    /// Token contract address, or a symbol known to the network (WETH, USDC)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Network preset used to resolve token symbols
    #[arg(short, long)]
    pub network: Option<NetworkType>,

    /// Private key for signing transactions (hex string, with or without 0x prefix)
    #[arg(short = 'k', long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Per-request RPC timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print name, symbol, decimals and total supply
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Balance of an account
    Balance { holder: String },

    /// Remaining allowance of `spender` over `owner`'s tokens
    Allowance { owner: String, spender: String },

    /// Current contract owner
    Owner,

    /// Market capitalization at a given price per token
    MarketCap {
        /// Price of one whole token
        price: String,

        /// Total supply in base units, read from the chain when omitted
        #[arg(long)]
        supply: Option<String>,
    },

    /// Send tokens
    Transfer {
        recipient: String,
        amount: String,
        #[command(flatten)]
        write: WriteArgs,
    },

    /// Set the allowance of a spender
    Approve {
        spender: String,
        amount: String,
        #[command(flatten)]
        write: WriteArgs,
    },

    /// Move tokens out of another account using the allowance
    TransferFrom {
        sender: String,
        recipient: String,
        amount: String,
        #[command(flatten)]
        write: WriteArgs,
    },

    /// Raise the allowance of a spender
    IncreaseAllowance {
        spender: String,
        amount: String,
        #[command(flatten)]
        write: WriteArgs,
    },

    /// Lower the allowance of a spender
    DecreaseAllowance {
        spender: String,
        amount: String,
        #[command(flatten)]
        write: WriteArgs,
    },

    /// Give up ownership of the contract
    RenounceOwnership {
        #[command(flatten)]
        write: WriteArgs,
    },

    /// Hand ownership of the contract to another account
    TransferOwnership {
        new_owner: String,
        #[command(flatten)]
        write: WriteArgs,
    },
}

/// Options shared by every state-changing command.
#[derive(Debug, Clone, Default, Args)]
pub struct WriteArgs {
    /// Amounts are base units instead of display units
    #[arg(long)]
    pub raw: bool,

    /// Gas limit
    #[arg(long)]
    pub gas_limit: Option<u64>,

    /// Legacy gas price in wei
    #[arg(long, conflicts_with_all = ["max_fee_per_gas", "max_priority_fee_per_gas"])]
    pub gas_price: Option<u128>,

    /// EIP-1559 max fee per gas in wei
    #[arg(long)]
    pub max_fee_per_gas: Option<u128>,

    /// EIP-1559 max priority fee per gas in wei
    #[arg(long)]
    pub max_priority_fee_per_gas: Option<u128>,
}

impl WriteArgs {
    pub fn transaction_parameters(&self) -> TransactionParameters {
        TransactionParameters {
            gas_limit: self.gas_limit,
            gas_price: self.gas_price,
            max_fee_per_gas: self.max_fee_per_gas,
            max_priority_fee_per_gas: self.max_priority_fee_per_gas,
            signer: None,
        }
    }
}
