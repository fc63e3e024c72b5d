//! Taskflow: a task workflow state machine with per-transition
//! authorization.
//!
//! Work items move through a fulfillment pipeline (`new` → `assigned` →
//! `started` → `finished` → `sent` → `archived`) whose edges form a directed
//! graph, and every requested status change is authorized per actor by
//! combining structural legality, ownership fast-paths, and a role-based
//! fallback. Committed changes are observed once per flush and raised as
//! status-change events.
//!
//! # Architecture
//!
//! Taskflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`workflow`]: status graph, transition authorization, and notification

pub mod workflow;
