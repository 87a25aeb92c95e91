use ethers::contract::abigen;

abigen!(
    ForTheBoysContract,
    r#"[
        function initialize() external
        function getMinter() external view returns (address)
        function balanceOf(address account) external view returns (uint256)
        function transfer(address recipient, uint256 amount) external returns (bool)
        function totalSupply() external view returns (uint256)
        function decimals() external view returns (uint8)
    ]"#
);

abigen!(
    ProxyAdmin,
    r#"[
        function owner() external view returns (address)
        function transferOwnership(address newOwner) external
        function getProxyAdmin(address proxy) external view returns (address)
        function getProxyImplementation(address proxy) external view returns (address)
        function upgrade(address proxy, address implementation) external
        function upgradeAndCall(address proxy, address implementation, bytes memory data) external payable
    ]"#
);

#[cfg(test)]
mod tests {
    use ethers::{abi::AbiEncode, utils::hex};

    use super::for_the_boys_contract::{BalanceOfCall, InitializeCall, TransferCall};

    #[test]
    fn initialize_calldata_is_the_bare_selector() {
        assert_eq!(hex::encode(InitializeCall {}.encode()), "8129fc1c");
    }

    #[test]
    fn erc20_selectors_match_the_standard() {
        let transfer = TransferCall {
            recipient: Default::default(),
            amount: Default::default(),
        };
        assert_eq!(hex::encode(&transfer.encode()[..4]), "a9059cbb");

        let balance_of = BalanceOfCall {
            account: Default::default(),
        };
        assert_eq!(hex::encode(&balance_of.encode()[..4]), "70a08231");
    }
}
