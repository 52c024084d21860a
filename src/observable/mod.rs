//! # Observable and its operators.
//!
//! Every operator is a pure function from one [`Observable`] to a new one: it
//! clones the upstream handle into a fresh producer closure which, on
//! subscription, subscribes upstream through an intercepting adapter.
//!
//! ```text
//! source ─► map ─► filter ─► limit ─► observe_on ─► subscribe(observer)
//!   ▲        │        │        │          │
//!   └────────┴────────┴────────┴──────────┘   each wraps exactly one upstream
//! ```
//!
//! The resulting graph is an acyclic chain: an operator can only reference an
//! observable that already exists.
//!
//! | Operator                       | Adapter behavior                                         |
//! |--------------------------------|----------------------------------------------------------|
//! | `map` / `try_map`              | transform; fault → one `on_error` for that value         |
//! | `filter` / `try_filter`        | keep matching; fault → one `on_error` for that value     |
//! | `limit`                        | first `n` values; terminal events always pass            |
//! | `flat_map` / `try_flat_map`    | subscribe inner streams; inner completions swallowed     |
//! | `subscribe_on`                 | run `subscribe` inside one scheduler job                 |
//! | `observe_on`                   | one scheduler job per delivered event                    |
//!
//! ## Faults do not end the stream
//! An operator that converts a fault into `on_error` keeps forwarding later
//! values from upstream. `limit` keeps draining upstream after its cap, and
//! `flat_map` keeps processing outer values after an inner error. Observers
//! that need "stop at first error" should dispose their subscription from
//! `on_error`.

mod core;
mod filter;
mod flat_map;
mod limit;
mod map;
mod observe_on;
mod sources;
mod subscribe_on;

pub use self::core::Observable;
