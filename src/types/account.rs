//! Loyalty account types
//!
//! This module defines the Account structure holding a point balance on one
//! airline program, together with its deposit and redemption operations.

use super::error::RewardsError;
use super::program::Program;
use super::rewards::{is_affordable, Points, PointsCost};
use tracing::debug;

/// Loyalty account state
///
/// The balance never goes negative: every mutation is checked before it is
/// applied, and a failed mutation leaves the account untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The program this account belongs to
    program: Program,

    /// Current balance in points
    balance: Points,

    /// Number of successful deposits
    deposit_count: u32,

    /// Number of successful redemptions
    redemption_count: u32,

    /// Amount of the most recent successful deposit
    last_deposit: Option<Points>,

    /// Amount of the most recent successful redemption
    last_redemption: Option<Points>,
}

impl Account {
    /// Create an account with an initial balance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The balance is negative (`InvalidAmount`)
    pub fn new(program: Program, balance: Points) -> Result<Self, RewardsError> {
        if balance < 0 {
            return Err(RewardsError::invalid_amount(
                program.as_str(),
                "opening balance",
                balance,
            ));
        }

        Ok(Account {
            program,
            balance,
            deposit_count: 0,
            redemption_count: 0,
            last_deposit: None,
            last_redemption: None,
        })
    }

    /// Create an account with a zero balance
    pub fn empty(program: Program) -> Self {
        Account {
            program,
            balance: 0,
            deposit_count: 0,
            redemption_count: 0,
            last_deposit: None,
            last_redemption: None,
        }
    }

    /// Credit points to the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is negative (`InvalidAmount`)
    /// - The new balance would overflow (`ArithmeticOverflow`)
    pub fn deposit(&mut self, amount: Points) -> Result<Points, RewardsError> {
        if amount < 0 {
            return Err(RewardsError::invalid_amount(
                self.program.as_str(),
                "deposit",
                amount,
            ));
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| RewardsError::arithmetic_overflow("deposit", self.program.as_str()))?;

        self.balance = new_balance;
        self.deposit_count += 1;
        self.last_deposit = Some(amount);
        debug!(program = %self.program, amount, balance = self.balance, "deposited points");

        Ok(self.balance)
    }

    /// Debit points from the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is negative (`InvalidAmount`)
    /// - The amount exceeds the balance (`InsufficientBalance`)
    pub fn redeem(&mut self, amount: Points) -> Result<Points, RewardsError> {
        if amount < 0 {
            return Err(RewardsError::invalid_amount(
                self.program.as_str(),
                "redemption",
                amount,
            ));
        }

        if amount > self.balance {
            return Err(RewardsError::insufficient_balance(
                self.program.as_str(),
                self.balance,
                amount,
            ));
        }

        self.balance -= amount;
        self.redemption_count += 1;
        self.last_redemption = Some(amount);
        debug!(program = %self.program, amount, balance = self.balance, "redeemed points");

        Ok(self.balance)
    }

    /// Current balance, without mutation
    pub fn balance_check(&self) -> Points {
        self.balance
    }

    /// Whether this balance covers a roundtrip at the given one-way cost
    pub fn can_afford_roundtrip(&self, one_way_cost: PointsCost) -> bool {
        is_affordable(one_way_cost, self.balance)
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn deposit_count(&self) -> u32 {
        self.deposit_count
    }

    pub fn redemption_count(&self) -> u32 {
        self.redemption_count
    }

    pub fn last_deposit(&self) -> Option<Points> {
        self.last_deposit
    }

    pub fn last_redemption(&self) -> Option<Points> {
        self.last_redemption
    }
}
