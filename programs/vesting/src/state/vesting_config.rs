use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Singleton config PDA: admin authority, custodied mint, and the two ledger
/// aggregates that must always reconcile against the vault balance.
///
/// Solvency invariant: `vault.amount >= total_vested_amount - total_claimed_amount`
/// after every operation.
#[account]
pub struct VestingConfig {
    /// Admin authority for create/revoke/emergency-withdraw.
    pub admin: Pubkey,
    /// Token mint under custody.
    pub mint: Pubkey,
    /// Sum of every active schedule's `total_amount`, reduced on revocation
    /// by the unvested remainder.
    pub total_vested_amount: u64,
    /// Sum of every claim ever settled across all beneficiaries.
    pub total_claimed_amount: u64,
    /// PDA bump (vault signer authority).
    pub bump: u8,
}

impl VestingConfig {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        8 +  // total_vested_amount
        8 +  // total_claimed_amount
        1;   // bump

    /// Record a new commitment. The vault must already hold enough to cover
    /// the full committed total including this amount; this is a precondition
    /// check, not a reservation.
    pub fn record_commitment(
        &mut self,
        amount: u64,
        vault_balance: u64,
    ) -> std::result::Result<(), VestingError> {
        let committed = self
            .total_vested_amount
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if vault_balance < committed {
            return Err(VestingError::InsufficientVaultBalance);
        }
        self.total_vested_amount = committed;
        Ok(())
    }

    /// Record a settled claim.
    pub fn record_claim(&mut self, amount: u64) -> std::result::Result<(), VestingError> {
        self.total_claimed_amount = self
            .total_claimed_amount
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    /// Remove the unvested remainder of a revoked schedule from the committed
    /// total. Underflow would mean the aggregates are corrupt.
    pub fn record_revocation_reduction(
        &mut self,
        amount: u64,
    ) -> std::result::Result<(), VestingError> {
        self.total_vested_amount = self
            .total_vested_amount
            .checked_sub(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    /// Committed-but-unclaimed total still owed to beneficiaries.
    pub fn outstanding(&self) -> std::result::Result<u64, VestingError> {
        self.total_vested_amount
            .checked_sub(self.total_claimed_amount)
            .ok_or(VestingError::MathOverflow)
    }

    /// Vault surplus beyond the outstanding commitment; the ceiling for
    /// emergency withdrawal.
    pub fn available_for_emergency_withdraw(
        &self,
        vault_balance: u64,
    ) -> std::result::Result<u64, VestingError> {
        vault_balance
            .checked_sub(self.outstanding()?)
            .ok_or(VestingError::MathOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> VestingConfig {
        VestingConfig {
            admin: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            total_vested_amount: 0,
            total_claimed_amount: 0,
            bump: 254,
        }
    }

    #[test]
    fn commitment_requires_full_vault_coverage() {
        let mut cfg = config();
        cfg.record_commitment(600, 1000).unwrap();
        assert_eq!(cfg.total_vested_amount, 600);
        // 600 + 500 > 1000: rejected, aggregate untouched.
        assert!(matches!(
            cfg.record_commitment(500, 1000),
            Err(VestingError::InsufficientVaultBalance)
        ));
        assert_eq!(cfg.total_vested_amount, 600);
        cfg.record_commitment(400, 1000).unwrap();
        assert_eq!(cfg.total_vested_amount, 1000);
    }

    #[test]
    fn claims_never_exceed_commitment_in_surplus_math() {
        let mut cfg = config();
        cfg.record_commitment(1000, 1500).unwrap();
        cfg.record_claim(300).unwrap();
        assert_eq!(cfg.total_claimed_amount, 300);
        assert_eq!(cfg.outstanding().unwrap(), 700);
        // 1500 in vault, 700 still owed.
        assert_eq!(cfg.available_for_emergency_withdraw(1500).unwrap(), 800);
        // After claiming 300 the vault would hold 1200.
        assert_eq!(cfg.available_for_emergency_withdraw(1200).unwrap(), 500);
    }

    #[test]
    fn revocation_reduction_shrinks_committed_total() {
        let mut cfg = config();
        cfg.record_commitment(1000, 1000).unwrap();
        cfg.record_revocation_reduction(700).unwrap();
        assert_eq!(cfg.total_vested_amount, 300);
        assert!(matches!(
            cfg.record_revocation_reduction(301),
            Err(VestingError::MathOverflow)
        ));
    }

    #[test]
    fn ledger_errors_convert_into_program_errors() {
        // Handlers bubble these results up with `?` into anchor's Result.
        let mut cfg = config();
        cfg.record_commitment(1000, 1000).unwrap();
        let res: anchor_lang::Result<u64> =
            (|| Ok(cfg.available_for_emergency_withdraw(999)?))();
        assert!(res.is_err());
        let ok: anchor_lang::Result<u64> =
            (|| Ok(cfg.available_for_emergency_withdraw(1500)?))();
        assert_eq!(ok.unwrap(), 500);
    }

    #[test]
    fn surplus_underflow_is_defensive_error() {
        let mut cfg = config();
        cfg.record_commitment(1000, 1000).unwrap();
        assert!(matches!(
            cfg.available_for_emergency_withdraw(999),
            Err(VestingError::MathOverflow)
        ));
    }
}
