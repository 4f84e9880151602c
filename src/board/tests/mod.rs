//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move tree counts from known positions
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Promotion, blocked pieces and game end
//! - `search.rs` - Search behaviour on small positions
//! - `proptest.rs` - Property-based tests

mod search;
