//! Supported chain table

/// One supported blockchain network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    /// SLIP-44 coin id
    pub id: u32,
    /// Directory name under `blockchains/`
    pub handle: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    /// Whether asset directories are named by EVM contract address
    pub evm: bool,
    /// Token-type tags issued on this chain, primary tag first
    pub token_types: &'static [&'static str],
    /// Explorer URL prefix for token pages, if the chain has tokens
    pub token_explorer: Option<&'static str>,
}

impl Chain {
    /// Check whether the chain uses EVM contract addresses
    pub fn is_evm(&self) -> bool {
        self.evm
    }
}

static CHAINS: &[Chain] = &[
    Chain {
        id: 0,
        handle: "bitcoin",
        name: "Bitcoin",
        symbol: "BTC",
        evm: false,
        token_types: &[],
        token_explorer: None,
    },
    Chain {
        id: 60,
        handle: "ethereum",
        name: "Ethereum",
        symbol: "ETH",
        evm: true,
        token_types: &["ERC20"],
        token_explorer: Some("https://etherscan.io/token/"),
    },
    Chain {
        id: 61,
        handle: "classic",
        name: "Ethereum Classic",
        symbol: "ETC",
        evm: true,
        token_types: &["ETC20"],
        token_explorer: Some("https://blockscout.com/etc/mainnet/tokens/"),
    },
    Chain {
        id: 195,
        handle: "tron",
        name: "Tron",
        symbol: "TRX",
        evm: false,
        token_types: &["TRC20", "TRC10"],
        token_explorer: Some("https://tronscan.io/#/token20/"),
    },
    Chain {
        id: 501,
        handle: "solana",
        name: "Solana",
        symbol: "SOL",
        evm: false,
        token_types: &["SPL"],
        token_explorer: Some("https://solscan.io/token/"),
    },
    Chain {
        id: 714,
        handle: "binance",
        name: "BNB Beacon Chain",
        symbol: "BNB",
        evm: false,
        token_types: &["BEP2"],
        token_explorer: Some("https://explorer.binance.org/asset/"),
    },
    Chain {
        id: 966,
        handle: "polygon",
        name: "Polygon",
        symbol: "MATIC",
        evm: true,
        token_types: &["POLYGON"],
        token_explorer: Some("https://polygonscan.com/token/"),
    },
    Chain {
        id: 10000070,
        handle: "optimism",
        name: "Optimism",
        symbol: "ETH",
        evm: true,
        token_types: &["OPTIMISM"],
        token_explorer: Some("https://optimistic.etherscan.io/token/"),
    },
    Chain {
        id: 10000250,
        handle: "fantom",
        name: "Fantom",
        symbol: "FTM",
        evm: true,
        token_types: &["FANTOM"],
        token_explorer: Some("https://ftmscan.com/token/"),
    },
    Chain {
        id: 10009000,
        handle: "avalanchec",
        name: "Avalanche C-Chain",
        symbol: "AVAX",
        evm: true,
        token_types: &["AVALANCHE"],
        token_explorer: Some("https://snowtrace.io/token/"),
    },
    Chain {
        id: 10042221,
        handle: "arbitrum",
        name: "Arbitrum",
        symbol: "ETH",
        evm: true,
        token_types: &["ARBITRUM"],
        token_explorer: Some("https://arbiscan.io/token/"),
    },
    Chain {
        id: 20000714,
        handle: "smartchain",
        name: "BNB Smart Chain",
        symbol: "BNB",
        evm: true,
        token_types: &["BEP20"],
        token_explorer: Some("https://bscscan.com/token/"),
    },
];

/// All supported chains, ordered by id
pub fn all_chains() -> &'static [Chain] {
    CHAINS
}

/// Look up a chain by its directory handle
pub fn chain_by_handle(handle: &str) -> Option<&'static Chain> {
    CHAINS.iter().find(|c| c.handle == handle)
}

/// Look up a chain by its SLIP-44 id
pub fn chain_by_id(id: u32) -> Option<&'static Chain> {
    CHAINS.iter().find(|c| c.id == id)
}
