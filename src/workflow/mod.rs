//! Task workflow core.
//!
//! Implements the task status state machine, per-transition authorization,
//! and flush-scoped status-change notification. A caller presents an actor,
//! a task snapshot, and a requested status to the
//! [`domain::TransitionAuthorizer`]; when a granted change is committed, the
//! [`services::StatusChangeNotifier`] raises one [`domain::StatusChangeEvent`]
//! per changed task and flush. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
