use walletview::market_data::PriceTable;
use walletview::models::WalletBalance;
use walletview::pipeline::derive;
use walletview::priority::{priority_of, Blockchain, DEFAULT_PRIORITY};

const CHAINS: [&str; 8] = [
    "osmosis",
    "ethereum",
    "arbitrum",
    "zilliqa",
    "neo",
    "unknownchain",
    "solana",
    "",
];

fn mixed_balances() -> Vec<WalletBalance> {
    let amounts = [3.0, 0.0, -1.5, 12.25, 0.4, 7.0];
    let currencies = ["ETH", "OSMO", "ARB", "ZIL", "NEO", "USDC"];
    let mut balances = Vec::new();
    for (i, chain) in CHAINS.iter().enumerate() {
        for (j, amount) in amounts.iter().enumerate() {
            balances.push(WalletBalance::new(
                currencies[(i + j) % currencies.len()],
                *amount,
                *chain,
            ));
        }
    }
    balances
}

fn prices() -> PriceTable {
    PriceTable::new()
        .with_price("ETH", 1000.0)
        .with_price("OSMO", 10.0)
        .with_price("ARB", 1.1)
}

#[test]
fn unknown_chains_rank_below_every_known_chain() {
    for chain in Blockchain::ALL {
        assert!(priority_of(chain.as_str()) > DEFAULT_PRIORITY);
    }
    for unknown in ["unknownchain", "solana", "", "bitcoin"] {
        assert_eq!(priority_of(unknown), DEFAULT_PRIORITY);
    }
}

#[test]
fn non_positive_amounts_never_appear() {
    let out = derive(&mixed_balances(), &prices());
    assert!(!out.is_empty());
    assert!(out.iter().all(|b| b.amount() > 0.0));
}

#[test]
fn unranked_chains_never_appear() {
    let out = derive(&mixed_balances(), &prices());
    assert!(out
        .iter()
        .all(|b| priority_of(b.blockchain()) > DEFAULT_PRIORITY));
}

#[test]
fn output_is_sorted_by_descending_priority() {
    let out = derive(&mixed_balances(), &prices());
    for pair in out.windows(2) {
        assert!(priority_of(pair[0].blockchain()) >= priority_of(pair[1].blockchain()));
    }
}

#[test]
fn output_is_exactly_the_eligible_subset() {
    let balances = mixed_balances();
    let out = derive(&balances, &prices());
    let expected = balances
        .iter()
        .filter(|b| priority_of(&b.blockchain) > DEFAULT_PRIORITY && b.amount > 0.0)
        .count();
    assert_eq!(out.len(), expected);
}

#[test]
fn derive_is_repeatable() {
    let balances = mixed_balances();
    assert_eq!(derive(&balances, &prices()), derive(&balances, &prices()));
}

#[test]
fn worked_example() {
    let balances = vec![
        WalletBalance::new("ETH", 2.0, "ethereum"),
        WalletBalance::new("OSMO", 5.0, "osmosis"),
        WalletBalance::new("XYZ", 3.0, "unknownchain"),
        WalletBalance::new("ARB", 0.0, "arbitrum"),
    ];
    let prices = PriceTable::new()
        .with_price("ETH", 1000.0)
        .with_price("OSMO", 10.0);

    let out = derive(&balances, &prices);
    let summary: Vec<(&str, f64)> = out.iter().map(|b| (b.currency(), b.usd_value)).collect();
    assert_eq!(summary, vec![("OSMO", 50.0), ("ETH", 2000.0)]);
}

#[test]
fn missing_price_is_nan_not_an_error() {
    let balances = vec![
        WalletBalance::new("ETH", 2.0, "ethereum"),
        WalletBalance::new("ATOM", 4.0, "ethereum"),
    ];
    let out = derive(&balances, &prices());
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].usd_value, 2000.0);
    assert!(out[1].usd_value.is_nan());
    assert_eq!(out[1].formatted, "4");
}
