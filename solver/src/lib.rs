//! Daily puzzle solver.
//!
//! One pure module per day under [`days`], each reading a small text input
//! and producing one integer answer per part. The architecture enforces a
//! strict separation:
//!
//! - **[`days`]**: Pure, deterministic solvers. No I/O, independent of each
//!   other, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (configuration, input files).
//!
//! The orchestration module ([`run`]) coordinates solvers with I/O to
//! implement CLI commands.

pub mod days;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod run;
