//! ERC20 token contract bindings.

use alloy_sol_types::sol;

sol! {
    /// Standard ERC20 token interface, with the allowance helpers and the
    /// Ownable entry points most deployed tokens ship with.
    #[derive(Debug, PartialEq, Eq)]
    interface ERC20 {
        /// Emitted when tokens are transferred
        event Transfer(
            address indexed from,
            address indexed to,
            uint256 value
        );

        /// Emitted when an allowance is set
        event Approval(
            address indexed owner,
            address indexed spender,
            uint256 value
        );

        /// Get token name
        function name() external view returns (string memory);

        /// Get token symbol
        function symbol() external view returns (string memory);

        /// Get token decimals
        function decimals() external view returns (uint8);

        /// Get total supply
        function totalSupply() external view returns (uint256);

        /// Get token balance of an account
        function balanceOf(address account) external view returns (uint256);

        /// Get allowance granted by owner to spender
        function allowance(address owner, address spender) external view returns (uint256);

        /// Approve spender to spend tokens
        function approve(address spender, uint256 amount) external returns (bool);

        /// Transfer tokens to recipient
        function transfer(address recipient, uint256 amount) external returns (bool);

        /// Transfer tokens from sender to recipient (requires allowance)
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);

        /// Atomically raise the allowance granted to spender
        function increaseAllowance(address spender, uint256 addedValue) external returns (bool);

        /// Atomically lower the allowance granted to spender
        function decreaseAllowance(address spender, uint256 subtractedValue) external returns (bool);

        /// Get the current contract owner
        function owner() external view returns (address);

        /// Leave the contract without an owner
        function renounceOwnership() external;

        /// Hand contract ownership to a new account
        function transferOwnership(address newOwner) external;
    }
}

#[cfg(test)]
mod tests {
    use super::ERC20;
    use alloy_sol_types::{SolCall, SolEvent};

    #[test]
    fn test_selectors_match_standard() {
        assert_eq!(ERC20::balanceOfCall::SELECTOR, [0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(ERC20::transferCall::SELECTOR, [0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(ERC20::approveCall::SELECTOR, [0x09, 0x5e, 0xa7, 0xb3]);
        assert_eq!(ERC20::transferFromCall::SELECTOR, [0x23, 0xb8, 0x72, 0xdd]);
        assert_eq!(ERC20::decimalsCall::SELECTOR, [0x31, 0x3c, 0xe5, 0x67]);
    }

    #[test]
    fn test_signatures() {
        assert_eq!(ERC20::transferFromCall::SIGNATURE, "transferFrom(address,address,uint256)");
        assert_eq!(ERC20::renounceOwnershipCall::SIGNATURE, "renounceOwnership()");
        assert_eq!(ERC20::Transfer::SIGNATURE, "Transfer(address,address,uint256)");
        assert_eq!(ERC20::Approval::SIGNATURE, "Approval(address,address,uint256)");
    }
}
