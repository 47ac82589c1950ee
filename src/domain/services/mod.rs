//! Domain Services
//!
//! Stateless logic that only reaches the outside world through ports.

mod plan_resolver;

pub use plan_resolver::PlanResolver;
