//! Core business logic module
//!
//! This module contains the front desk components:
//! - `traits` - Trait abstractions for interchangeable implementations
//! - `id_generator` - Random and sequential account number sources
//! - `account_manager` - Account collection and current-account selection
//! - `menu` - Main menu text and choice decoding
//! - `session` - The interactive menu loop and its six actions

pub mod account_manager;
pub mod id_generator;
pub mod menu;
pub mod session;
pub mod traits;

pub use account_manager::AccountManager;
pub use id_generator::{RandomIdGenerator, SequentialIdGenerator};
pub use menu::MenuChoice;
pub use session::Session;
pub use traits::IdGenerator;
