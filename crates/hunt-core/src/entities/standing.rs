//! Standings - totals and ranks derived from claims
//!
//! Nothing here is stored. Every leaderboard is recomputed from a fresh
//! snapshot of users and their claims.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::{ClaimDetail, User};
use crate::value_objects::Snowflake;

/// Aggregate score of one user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserTotals {
    pub total_found: i64,
    pub total_points: i64,
    /// When the user reached `total_points`, i.e. their most recent claim
    pub last_claim_at: Option<DateTime<Utc>>,
}

impl UserTotals {
    pub fn from_claims<'a>(claims: impl IntoIterator<Item = &'a ClaimDetail>) -> Self {
        claims
            .into_iter()
            .fold(Self::default(), |mut totals, claim| {
                totals.total_found += 1;
                totals.total_points += i64::from(claim.points);
                totals.last_claim_at = totals.last_claim_at.max(Some(claim.claimed_at));
                totals
            })
    }
}

/// A user and every claim they hold, as read from one store snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithClaims {
    pub user: User,
    pub claims: Vec<ClaimDetail>,
}

/// A leaderboard row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedUser {
    /// 1-based, distinct and consecutive
    pub rank: u32,
    pub user: User,
    pub totals: UserTotals,
    pub claims: Vec<ClaimDetail>,
}

/// Where one user sits on the leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankInfo {
    pub user_id: Snowflake,
    pub rank: u32,
    pub total_players: u32,
    pub totals: UserTotals,
}

impl RankInfo {
    pub fn locate(board: &[RankedUser], user_id: Snowflake) -> Option<Self> {
        board.iter().find(|r| r.user.id == user_id).map(|r| Self {
            user_id,
            rank: r.rank,
            total_players: board.len() as u32,
            totals: r.totals,
        })
    }
}

/// Order users into a leaderboard.
///
/// Points descending, then whoever reached their total first, then users with
/// no claims, then user id ascending. The result never depends on input order.
pub fn rank_users(users: Vec<UserWithClaims>) -> Vec<RankedUser> {
    let mut rows: Vec<(UserTotals, UserWithClaims)> = users
        .into_iter()
        .map(|u| (UserTotals::from_claims(&u.claims), u))
        .collect();

    rows.sort_by(|(a_totals, a), (b_totals, b)| {
        b_totals
            .total_points
            .cmp(&a_totals.total_points)
            .then_with(|| earliest_first(a_totals.last_claim_at, b_totals.last_claim_at))
            .then_with(|| a.user.id.cmp(&b.user.id))
    });

    rows.into_iter()
        .zip(1u32..)
        .map(|((totals, mut entry), rank)| {
            entry
                .claims
                .sort_by(|a, b| a.claimed_at.cmp(&b.claimed_at).then(a.claim_id.cmp(&b.claim_id)));
            RankedUser {
                rank,
                user: entry.user,
                totals,
                claims: entry.claims,
            }
        })
        .collect()
}

fn earliest_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
