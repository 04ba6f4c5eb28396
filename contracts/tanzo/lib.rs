#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod model;
pub mod ownership;

pub use model::{zero_account, Error, Result, DECIMALS, SCALING_FACTOR, TOTAL_SUPPLY};
pub use ownership::Ownership;

/// Fixed-supply fungible token with delegated spending, a two-step
/// ownership handover and an owner-only rescue of tokens parked on the
/// contract's own account.
#[ink::contract]
mod tanzo {
    use crate::model::{zero_account, Error, Result, DECIMALS, TOTAL_SUPPLY};
    use crate::ownership::Ownership;
    use ink::storage::Mapping;

    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        pub(crate) from_acc: AccountId,
        #[ink(topic)]
        pub(crate) to_acc: AccountId,
        pub(crate) amount_val: Balance,
    }

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        pub(crate) owner_acc: AccountId,
        #[ink(topic)]
        pub(crate) spender_acc: AccountId,
        pub(crate) amount_val: Balance,
    }

    #[ink(storage)]
    pub struct Tanzo {
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
        ownership: Ownership,
    }

    impl Default for Tanzo {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Tanzo {
        // -------- constructors --------

        /// Mints the whole supply to the deployer, who also becomes owner.
        #[ink(constructor)]
        pub fn new() -> Self {
            let owner_acc = Self::env().caller();
            let mut balances = Mapping::default();
            balances.insert(&owner_acc, &TOTAL_SUPPLY);

            Self::env().emit_event(Transfer {
                from_acc: zero_account(),
                to_acc: owner_acc,
                amount_val: TOTAL_SUPPLY,
            });

            Self {
                balances,
                allowances: Mapping::default(),
                ownership: Ownership::new(owner_acc),
            }
        }

        // -------- modifiers (helpers) --------

        fn only_owner(&self) -> Result<()> {
            let caller_acc = self.env().caller();
            self.ownership.ensure_owner(caller_acc).inspect_err(|_| {
                ink::env::debug_println!("rejected: caller {:?} is not the owner", caller_acc);
            })
        }

        // -------- read API --------

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            TOTAL_SUPPLY
        }

        #[ink(message)]
        pub fn token_decimals(&self) -> u8 {
            DECIMALS
        }

        #[ink(message)]
        pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
            self.balances.get(&owner_acc).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.allowances.get(&(owner_acc, spender_acc)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.ownership.owner()
        }

        #[ink(message)]
        pub fn pending_owner(&self) -> Option<AccountId> {
            self.ownership.pending()
        }

        // -------- write API --------

        #[ink(message)]
        pub fn transfer(&mut self, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            if to_acc == zero_account() {
                return Err(Error::ZeroAddress)
            }
            let from_acc = self.env().caller();
            self.move_balance(from_acc, to_acc, amount_val)?;
            self.env().emit_event(Transfer { from_acc, to_acc, amount_val });
            Ok(())
        }

        /// Overwrites the caller's allowance for `spender_acc`.
        ///
        /// Neither the caller's balance nor the spender are checked here; the
        /// zero account is an accepted spender. Funds are checked at spend time.
        #[ink(message)]
        pub fn approve(&mut self, spender_acc: AccountId, amount_val: Balance) -> Result<()> {
            let owner_acc = self.env().caller();
            self.allowances.insert(&(owner_acc, spender_acc), &amount_val);
            self.env().emit_event(Approval { owner_acc, spender_acc, amount_val });
            Ok(())
        }

        #[ink(message)]
        pub fn increase_allowance(&mut self, spender_acc: AccountId, add_val: Balance) -> Result<()> {
            let owner_acc = self.env().caller();
            let current_val = self.allowance(owner_acc, spender_acc);
            let amount_val = current_val.checked_add(add_val).ok_or(Error::Overflow)?;
            self.allowances.insert(&(owner_acc, spender_acc), &amount_val);
            self.env().emit_event(Approval { owner_acc, spender_acc, amount_val });
            Ok(())
        }

        /// Lowers the allowance, bottoming out at zero.
        #[ink(message)]
        pub fn decrease_allowance(&mut self, spender_acc: AccountId, sub_val: Balance) -> Result<()> {
            let owner_acc = self.env().caller();
            let current_val = self.allowance(owner_acc, spender_acc);
            let amount_val = current_val.saturating_sub(sub_val);
            self.allowances.insert(&(owner_acc, spender_acc), &amount_val);
            self.env().emit_event(Approval { owner_acc, spender_acc, amount_val });
            Ok(())
        }

        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            amount_val: Balance,
        ) -> Result<()> {
            if to_acc == zero_account() {
                return Err(Error::ZeroAddress)
            }

            let spender_acc = self.env().caller();
            let current_allow = self.allowance(from_acc, spender_acc);
            if current_allow < amount_val {
                return Err(Error::InsufficientAllowance)
            }
            let new_allow = current_allow.checked_sub(amount_val).ok_or(Error::Overflow)?;

            // Nothing is written unless the balance move succeeds.
            self.move_balance(from_acc, to_acc, amount_val)?;
            self.allowances.insert(&(from_acc, spender_acc), &new_allow);

            self.env().emit_event(Transfer { from_acc, to_acc, amount_val });
            Ok(())
        }

        // -------- admin / ownership --------

        #[ink(message)]
        pub fn transfer_ownership(&mut self, candidate_acc: AccountId) -> Result<()> {
            let caller_acc = self.env().caller();
            self.ownership = self.ownership.nominate(caller_acc, candidate_acc)?;
            Ok(())
        }

        #[ink(message)]
        pub fn claim_ownership(&mut self) -> Result<()> {
            let caller_acc = self.env().caller();
            self.ownership = self.ownership.claim(caller_acc)?;
            Ok(())
        }

        /// Sends every token held by the contract's own account to `to_acc`.
        /// Succeeds without effect when nothing is held.
        #[ink(message)]
        pub fn claim_tokens(&mut self, to_acc: AccountId) -> Result<()> {
            self.only_owner()?;
            if to_acc == zero_account() {
                return Err(Error::ZeroAddress)
            }

            let self_acc = self.env().account_id();
            let held_val = self.balance_of(self_acc);
            if held_val == 0 {
                return Ok(())
            }

            self.move_balance(self_acc, to_acc, held_val)?;
            self.env().emit_event(Transfer {
                from_acc: self_acc,
                to_acc,
                amount_val: held_val,
            });
            Ok(())
        }

        // ---- internals ----

        /// Debits `from_acc` and credits `to_acc`. Both new balances are
        /// computed before either is written.
        fn move_balance(&mut self, from_acc: AccountId, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            let from_bal = self.balance_of(from_acc);
            if from_bal < amount_val {
                return Err(Error::InsufficientBalance)
            }
            if from_acc == to_acc {
                return Ok(())
            }

            let new_from = from_bal.checked_sub(amount_val).ok_or(Error::Overflow)?;
            let new_to = self
                .balance_of(to_acc)
                .checked_add(amount_val)
                .ok_or(Error::Overflow)?;

            self.balances.insert(&from_acc, &new_from);
            self.balances.insert(&to_acc, &new_to);
            Ok(())
        }
    }


    #[cfg(all(test, feature = "e2e-tests"))]
    mod e2e_tests {
        use super::*;
        use ink_e2e::ContractsBackend;

        type E2EResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

        #[ink_e2e::test]
        async fn e2e_transfer_and_claim<Client: E2EBackend>(mut client: Client) -> E2EResult<()> {
            let mut constructor = TanzoRef::new();
            let contract = client
                .instantiate("tanzo", &ink_e2e::alice(), &mut constructor)
                .submit()
                .await
                .expect("instantiate failed");
            let mut call_builder = contract.call_builder::<Tanzo>();

            let bob_acc = ink_e2e::account_id(ink_e2e::AccountKeyring::Bob);
            let transfer = call_builder.transfer(bob_acc, 100);
            client
                .call(&ink_e2e::alice(), &transfer)
                .submit()
                .await
                .expect("transfer failed");

            let balance_of = call_builder.balance_of(bob_acc);
            let balance_res = client.call(&ink_e2e::alice(), &balance_of).dry_run().await?;
            assert_eq!(balance_res.return_value(), 100);

            let claim = call_builder.claim_tokens(bob_acc);
            let claim_res = client.call(&ink_e2e::bob(), &claim).dry_run().await?;
            assert_eq!(claim_res.return_value(), Err(Error::NotOwner));
            Ok(())
        }
    }
}
