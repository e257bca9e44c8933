//! Token-pair expansion and pool-candidate generation.

use alloy::primitives::B256;

use super::PoolCandidate;
use super::address::{compute_pool_address, sort_token_pair};
use crate::tokens::Token;

/// Expands {token_in, token_out} ∪ routing tokens into every unique
/// unordered pair, deduplicating by address and preserving first-seen
/// order. No self-pairs; C(n, 2) pairs for n unique tokens.
pub fn expand_token_pairs(
    token_in: &Token,
    token_out: &Token,
    routing_tokens: &[Token],
) -> Vec<(Token, Token)> {
    let mut unique: Vec<&Token> = Vec::new();
    for token in [token_in, token_out].into_iter().chain(routing_tokens) {
        if !unique.contains(&token) {
            unique.push(token);
        }
    }

    let mut pairs = Vec::with_capacity(unique.len() * unique.len().saturating_sub(1) / 2);
    for (i, a) in unique.iter().enumerate() {
        for b in &unique[i + 1..] {
            pairs.push(((*a).clone(), (*b).clone()));
        }
    }
    pairs
}

/// Crosses pairs with the fee-tier set, pairs-major fee-minor, computing
/// each candidate's deterministic address.
pub fn generate_pool_candidates(
    pairs: &[(Token, Token)],
    fee_tiers: &[u32],
    factory: alloy::primitives::Address,
    init_code_hash: B256,
) -> Vec<PoolCandidate> {
    let mut candidates = Vec::with_capacity(pairs.len() * fee_tiers.len());
    for (a, b) in pairs {
        // Pair expansion only ever produces ERC20 tokens; native legs are
        // wrapped before discovery starts.
        let (Some(addr_a), Some(addr_b)) = (a.address(), b.address()) else {
            continue;
        };
        let (token0, token1) = if sort_token_pair(addr_a, addr_b).0 == addr_a {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        };
        for &fee in fee_tiers {
            let address = compute_pool_address(factory, (addr_a, addr_b), fee, init_code_hash);
            candidates.push(PoolCandidate {
                token0: token0.clone(),
                token1: token1.clone(),
                fee,
                address,
            });
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_POOL_INIT_CODE_HASH, FEE_TIERS};
    use alloy::primitives::{Address, address};

    fn token(byte: u8) -> Token {
        Token::erc20(1, Address::repeat_byte(byte), 18)
    }

    #[test]
    fn pair_count_is_n_choose_2() {
        let t_in = token(1);
        let t_out = token(2);
        let routing = vec![token(3), token(4), token(5)];
        let pairs = expand_token_pairs(&t_in, &t_out, &routing);
        assert_eq!(pairs.len(), 10); // C(5, 2)
    }

    #[test]
    fn duplicates_collapse_before_pairing() {
        let t_in = token(1);
        let t_out = token(2);
        // Routing list repeats token_in and itself.
        let routing = vec![token(1), token(3), token(3)];
        let pairs = expand_token_pairs(&t_in, &t_out, &routing);
        assert_eq!(pairs.len(), 3); // C(3, 2)
        // First-seen order kept: (1,2) (1,3) (2,3).
        assert_eq!(pairs[0], (token(1), token(2)));
        assert_eq!(pairs[1], (token(1), token(3)));
        assert_eq!(pairs[2], (token(2), token(3)));
    }

    #[test]
    fn no_self_pairs() {
        let t_in = token(1);
        let t_out = token(2);
        let pairs = expand_token_pairs(&t_in, &t_out, &[]);
        assert_eq!(pairs.len(), 1);
        assert_ne!(pairs[0].0, pairs[0].1);
    }

    #[test]
    fn candidates_are_pairs_major_fee_minor() {
        let factory = address!("0f85e0929eb510de3dbccfbc966ebc286fcaf726");
        let pairs = vec![(token(1), token(2)), (token(1), token(3))];
        let candidates =
            generate_pool_candidates(&pairs, &FEE_TIERS, factory, DEFAULT_POOL_INIT_CODE_HASH);
        assert_eq!(candidates.len(), 8);
        assert_eq!(candidates[0].fee, 100);
        assert_eq!(candidates[3].fee, 10_000);
        assert_eq!(candidates[0].token1, token(2));
        assert_eq!(candidates[4].token1, token(3));
        // token0/token1 are sorted by address.
        for candidate in &candidates {
            assert!(candidate.token0.address().unwrap() < candidate.token1.address().unwrap());
        }
    }
}
