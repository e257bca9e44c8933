//! Bounded depth-first route enumeration.
//!
//! Cycle prevention is by pool identity, not token identity: a token may be
//! revisited through a different pool. `max_hops` bounds the number of pools
//! per route. Output order is deterministic given a deterministically
//! ordered pool input.

use super::Route;
use crate::pools::Pool;
use crate::tokens::Token;

/// Enumerates every acyclic route from `token_in` to `token_out` using at
/// most `max_hops` pools.
pub fn enumerate_routes(
    pools: &[Pool],
    token_in: &Token,
    token_out: &Token,
    max_hops: u32,
) -> Vec<Route> {
    let mut routes = Vec::new();
    let mut path: Vec<&Pool> = Vec::with_capacity(max_hops as usize);
    walk(pools, token_in, token_in, token_out, max_hops, &mut path, &mut routes);
    routes
}

fn walk<'p>(
    pools: &'p [Pool],
    origin: &Token,
    current: &Token,
    target: &Token,
    remaining_hops: u32,
    path: &mut Vec<&'p Pool>,
    routes: &mut Vec<Route>,
) {
    if remaining_hops == 0 {
        return;
    }
    for pool in pools {
        if path.iter().any(|used| used.address == pool.address) {
            continue;
        }
        let Some(next) = pool.other_token(current) else {
            continue;
        };

        path.push(pool);
        if next == target {
            routes.push(Route {
                pools: path.iter().map(|p| (*p).clone()).collect(),
                token_in: origin.clone(),
                token_out: target.clone(),
            });
        } else if remaining_hops > 1 {
            walk(pools, origin, next, target, remaining_hops - 1, path, routes);
        }
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, U256};

    fn token(byte: u8) -> Token {
        Token::erc20(1, Address::repeat_byte(byte), 18)
    }

    fn pool(a: u8, b: u8) -> Pool {
        let (t0, t1) = if a < b { (token(a), token(b)) } else { (token(b), token(a)) };
        Pool {
            token0: t0,
            token1: t1,
            fee: 3000,
            address: Address::repeat_byte(a * 16 + b),
            sqrt_price_x96: U256::from(1u64) << 96,
            tick: 0,
            liquidity: 1,
        }
    }

    /// Graph from the design notes: tokens T1..T4 (bytes 1..4), pools
    /// [T1-T2, T2-T3, T2-T4, T3-T4].
    fn diamond() -> Vec<Pool> {
        vec![pool(1, 2), pool(2, 3), pool(2, 4), pool(3, 4)]
    }

    #[test]
    fn three_hops_find_both_routes() {
        let routes = enumerate_routes(&diamond(), &token(1), &token(4), 3);
        assert_eq!(routes.len(), 2);
        // Deterministic order: pool order drives the search, so the
        // T2-T3-T4 detour (through the earlier T2-T3 pool) is emitted
        // before the direct T2-T4 hop.
        assert_eq!(routes[0].pools.len(), 3);
        assert_eq!(routes[1].pools.len(), 2);
        for route in &routes {
            assert!(route.pools[0].involves(&token(1)));
            assert!(route.pools.last().unwrap().involves(&token(4)));
        }
    }

    #[test]
    fn two_hops_prune_the_detour() {
        let routes = enumerate_routes(&diamond(), &token(1), &token(4), 2);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].pools.len(), 2);
    }

    #[test]
    fn pools_never_repeat_within_a_route() {
        let routes = enumerate_routes(&diamond(), &token(1), &token(4), 4);
        for route in &routes {
            let mut seen = std::collections::HashSet::new();
            for pool in &route.pools {
                assert!(seen.insert(pool.address), "pool repeated in route");
            }
            assert!(route.pools.len() <= 4);
        }
    }

    #[test]
    fn token_may_be_revisited_via_a_different_pool() {
        // Two parallel T1-T2 pools and a T2-T3 pool: T1->T2->T1 is not a
        // valid terminal here, but T2 is reachable twice in T1->T3 search
        // space without tripping the pool-identity check.
        let mut pools = vec![pool(1, 2), pool(2, 3)];
        let mut parallel = pool(1, 2);
        parallel.address = Address::repeat_byte(0xAA);
        parallel.fee = 500;
        pools.push(parallel);
        let routes = enumerate_routes(&pools, &token(1), &token(3), 2);
        // Both T1-T2 pools can start a route.
        assert_eq!(routes.len(), 2);
    }

    #[test]
    fn single_hop_direct_pool_only() {
        let routes = enumerate_routes(&diamond(), &token(1), &token(2), 1);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].pools.len(), 1);
        assert!(enumerate_routes(&diamond(), &token(1), &token(4), 1).is_empty());
    }
}
