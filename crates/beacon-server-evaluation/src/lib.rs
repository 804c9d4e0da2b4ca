// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Flag evaluation server for the Beacon feature flag service.
//!
//! Given an evaluation request (namespace, flag key, entity id, and a
//! string context map), this crate decides which variant applies for a
//! variant-typed flag, or which boolean value applies for a boolean-typed
//! flag, deterministically and without mutable state.
//!
//! # Architecture
//!
//! - `store` - the read-only storage contract the evaluator consumes
//! - `bucket` - consistent-hash percentage placement of entities
//! - `matcher` - typed constraint and segment matching
//! - `evaluation` - the `Variant` / `Boolean` / `Batch` operations
//! - `error` - the `not_found` / `invalid` / `internal` error surface
//!
//! # Example
//!
//! ```ignore
//! use beacon_flags_core::EvaluationRequest;
//! use beacon_server_evaluation::Evaluation;
//!
//! let evaluation = Evaluation::new(store);
//!
//! let req = EvaluationRequest::new("default", "checkout-v2", "user-42")
//! 	.with_context_value("plan", "enterprise");
//! let resp = evaluation.variant(&req).await?;
//!
//! if resp.r#match {
//! 	println!("serving variant {}", resp.variant_key);
//! }
//! ```

pub mod bucket;
pub mod error;
pub mod evaluation;
pub mod matcher;
pub mod store;

pub use bucket::{bucket, BUCKET_COUNT};
pub use error::{EvaluationError, Result};
pub use evaluation::Evaluation;
pub use store::EvaluationStore;

// Re-export core types for convenience
pub use beacon_flags_core::*;
