//! Browser-free core of the Loan Finder UI.
//!
//! Everything here runs natively and is unit-tested without a DOM. The WASM
//! frontend implements [`controller::View`] and drives a [`Controller`].

pub mod compare;
pub mod config;
pub mod controller;
pub mod credit;
pub mod emi;
pub mod error;
pub mod format;
pub mod notice;
pub mod share;
pub mod tasks;
pub mod validate;

pub use compare::{AddOutcome, CompareButton, CompareList};
pub use config::UiConfig;
pub use controller::{Controller, View};
pub use credit::CreditTier;
pub use emi::{EmiBreakdown, LoanInput, RawLoanInput};
pub use error::{Capability, Field, InputError, LoanError};
pub use notice::{Notice, Severity};
pub use tasks::{TaskKey, TaskSlots};
