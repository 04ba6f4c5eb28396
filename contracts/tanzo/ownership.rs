//! Two-step administrative handover.
//!
//! The current owner nominates a candidate, and only that candidate can
//! complete the handover by claiming. Until then the old owner keeps full
//! control and may replace the offer.

use crate::model::{Error, Result};
use ink::primitives::AccountId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[ink::scale_derive(Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(ink::storage::traits::StorageLayout))]
pub enum Ownership {
    Settled {
        owner_acc: AccountId,
    },
    Offered {
        owner_acc: AccountId,
        pending_acc: AccountId,
    },
}

impl Ownership {
    pub fn new(owner_acc: AccountId) -> Self {
        Ownership::Settled { owner_acc }
    }

    pub fn owner(&self) -> AccountId {
        match *self {
            Ownership::Settled { owner_acc } | Ownership::Offered { owner_acc, .. } => owner_acc,
        }
    }

    /// Candidate of the open offer, if any.
    pub fn pending(&self) -> Option<AccountId> {
        match *self {
            Ownership::Settled { .. } => None,
            Ownership::Offered { pending_acc, .. } => Some(pending_acc),
        }
    }

    pub fn ensure_owner(&self, caller_acc: AccountId) -> Result<()> {
        if caller_acc != self.owner() {
            return Err(Error::NotOwner)
        }
        Ok(())
    }

    /// Opens (or replaces) an offer to `candidate_acc`.
    pub fn nominate(self, caller_acc: AccountId, candidate_acc: AccountId) -> Result<Self> {
        self.ensure_owner(caller_acc)?;
        Ok(Ownership::Offered {
            owner_acc: self.owner(),
            pending_acc: candidate_acc,
        })
    }

    /// Completes the handover; the offer slot is cleared in the same step.
    pub fn claim(self, caller_acc: AccountId) -> Result<Self> {
        match self {
            Ownership::Offered { pending_acc, .. } if pending_acc == caller_acc => {
                Ok(Ownership::Settled { owner_acc: pending_acc })
            }
            _ => Err(Error::NotPendingOwner),
        }
    }
}
