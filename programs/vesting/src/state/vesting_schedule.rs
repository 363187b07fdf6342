use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Per-beneficiary vesting schedule PDA.
///
/// Existence is structural: the PDA either exists or it does not, so there is
/// no sentinel field for "no schedule". Created once per beneficiary, mutated
/// in place by claim and revoke, never closed.
#[account]
pub struct VestingSchedule {
    /// Beneficiary wallet (also part of the PDA seeds).
    pub beneficiary: Pubkey,
    /// Total value committed to this beneficiary. Clamped down to the
    /// vested-at-revocation amount when the schedule is revoked.
    pub total_amount: u64,
    /// Cumulative amount already transferred out; never decreases.
    pub claimed_amount: u64,
    /// Vesting start (Unix seconds, UTC).
    pub start_ts: i64,
    /// Linear vesting span in seconds (> 0).
    pub duration: i64,
    /// Cliff in seconds from start (0 <= cliff <= duration); no accrual
    /// before `start_ts + cliff`.
    pub cliff: i64,
    /// One-way revocation flag.
    pub revoked: bool,
    /// PDA bump.
    pub bump: u8,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // beneficiary
        8 +  // total_amount
        8 +  // claimed_amount
        8 +  // start_ts
        8 +  // duration
        8 +  // cliff
        1 +  // revoked
        1;   // bump

    /// Amount vested at `now`. Pure; branch order matters: a revoked
    /// schedule is frozen at its clamped `total_amount` (the amount vested at
    /// the moment of revocation), the cliff gates all accrual, and the linear
    /// term uses a u128 intermediate so the multiplication cannot overflow
    /// before the division.
    pub fn vested_amount(&self, now: i64) -> std::result::Result<u64, VestingError> {
        if self.revoked {
            return Ok(self.total_amount);
        }
        let cliff_ts = self
            .start_ts
            .checked_add(self.cliff)
            .ok_or(VestingError::MathOverflow)?;
        if now < cliff_ts {
            return Ok(0);
        }
        let end_ts = self
            .start_ts
            .checked_add(self.duration)
            .ok_or(VestingError::MathOverflow)?;
        if now >= end_ts {
            return Ok(self.total_amount);
        }
        // Here start_ts <= cliff_ts <= now < end_ts, so 0 <= elapsed < duration.
        let elapsed = now
            .checked_sub(self.start_ts)
            .ok_or(VestingError::MathOverflow)?;
        let vested = (self.total_amount as u128)
            .checked_mul(elapsed as u128)
            .ok_or(VestingError::MathOverflow)?
            / (self.duration as u128);
        u64::try_from(vested).map_err(|_| VestingError::MathOverflow)
    }

    /// Vested-but-unclaimed amount at `now`. The subtraction cannot underflow
    /// while the `claimed_amount <= total_amount` invariant holds.
    pub fn claimable_amount(&self, now: i64) -> std::result::Result<u64, VestingError> {
        self.vested_amount(now)?
            .checked_sub(self.claimed_amount)
            .ok_or(VestingError::MathOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000;

    fn schedule(total: u64, duration: i64, cliff: i64) -> VestingSchedule {
        VestingSchedule {
            beneficiary: Pubkey::new_unique(),
            total_amount: total,
            claimed_amount: 0,
            start_ts: T0,
            duration,
            cliff,
            revoked: false,
            bump: 255,
        }
    }

    #[test]
    fn cliff_gates_accrual() {
        let s = schedule(1000, 1000, 100);
        assert_eq!(s.vested_amount(T0 + 50).unwrap(), 0);
        assert_eq!(s.claimable_amount(T0 + 50).unwrap(), 0);
        // At the cliff boundary the linear term applies: 1000 * 100 / 1000.
        assert_eq!(s.vested_amount(T0 + 100).unwrap(), 100);
        assert_eq!(s.vested_amount(T0 + 1000).unwrap(), 1000);
    }

    #[test]
    fn zero_cliff_at_start_vests_nothing() {
        let s = schedule(1000, 1000, 0);
        assert_eq!(s.vested_amount(T0).unwrap(), 0);
    }

    #[test]
    fn fully_vested_at_and_after_end() {
        let s = schedule(777, 500, 0);
        assert_eq!(s.vested_amount(T0 + 500).unwrap(), 777);
        assert_eq!(s.vested_amount(T0 + 1_000_000).unwrap(), 777);
    }

    #[test]
    fn accrual_is_non_decreasing() {
        let s = schedule(999, 1000, 250);
        let mut prev = 0u64;
        for t in (0..=1200).step_by(50) {
            let v = s.vested_amount(T0 + t).unwrap();
            assert!(v >= prev, "accrual decreased at t+{t}");
            prev = v;
        }
        assert_eq!(prev, 999);
    }

    #[test]
    fn linear_term_floors() {
        let s = schedule(10, 3, 0);
        assert_eq!(s.vested_amount(T0 + 1).unwrap(), 3);
        assert_eq!(s.vested_amount(T0 + 2).unwrap(), 6);
        assert_eq!(s.vested_amount(T0 + 3).unwrap(), 10);
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        // Would overflow a u64 multiplication without the u128 intermediate.
        let s = schedule(u64::MAX, 1_000_000_000, 0);
        let v = s.vested_amount(T0 + 500_000_000).unwrap();
        assert_eq!(v, u64::MAX / 2);
    }

    #[test]
    fn incremental_claims_settle_exactly_once() {
        let mut s = schedule(1000, 1000, 0);
        let first = s.claimable_amount(T0 + 500).unwrap();
        assert_eq!(first, 500);
        s.claimed_amount = 500;
        // No elapsed time: nothing further to claim.
        assert_eq!(s.claimable_amount(T0 + 500).unwrap(), 0);
        let second = s.claimable_amount(T0 + 1000).unwrap();
        assert_eq!(second, 500);
        s.claimed_amount = 1000;
        assert_eq!(s.claimable_amount(T0 + 2000).unwrap(), 0);
    }

    #[test]
    fn revoked_schedule_is_frozen_at_claimed_amount() {
        let mut s = schedule(1000, 1000, 0);
        // Revoke at t+300: vested = 300, total clamped, flag set.
        let vested = s.vested_amount(T0 + 300).unwrap();
        assert_eq!(vested, 300);
        s.revoked = true;
        s.total_amount = vested;
        // Accrual is frozen at 300; the residue is claimable exactly once.
        assert_eq!(s.vested_amount(T0 + 900).unwrap(), 300);
        assert_eq!(s.claimable_amount(T0 + 900).unwrap(), 300);
        s.claimed_amount = 300;
        assert_eq!(s.vested_amount(T0 + 2000).unwrap(), 300);
        assert_eq!(s.claimable_amount(T0 + 2000).unwrap(), 0);
    }
}
