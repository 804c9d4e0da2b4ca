// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Beacon feature flag service.
//!
//! This crate carries the shared data model for flag evaluation: flags and
//! their types, variant-flag rules with weighted distributions, boolean-flag
//! rollouts, the typed constraint language, and the request/response wire
//! types. It is consumed by the evaluation server
//! (`beacon-server-evaluation`) and by anything implementing the storage
//! side of the contract.
//!
//! Everything here is plain data: no I/O, no clocks, no randomness. That is
//! what keeps evaluation deterministic: the same store contents and the
//! same request always produce the same decision.
//!
//! # Example
//!
//! ```
//! use beacon_flags_core::{EvaluationReason, EvaluationRequest};
//!
//! let req = EvaluationRequest::new("default", "checkout-v2", "user-42")
//! 	.with_context_value("plan", "enterprise");
//!
//! assert_eq!(req.flag_key, "checkout-v2");
//! assert_eq!(EvaluationReason::default(), EvaluationReason::Unknown);
//! ```

pub mod constraint;
pub mod evaluation;
pub mod flag;
pub mod rollout;
pub mod rule;

pub use constraint::{ComparisonType, Constraint, ConstraintOperator};
pub use evaluation::{
	BatchEvaluationRequest, BatchEvaluationResponse, BooleanEvaluationResponse,
	ErrorEvaluationResponse, EvaluationReason, EvaluationRequest, EvaluationResponse,
	EvaluationResponseBody, EvaluationResponseType, VariantEvaluationResponse,
};
pub use flag::{Flag, FlagType};
pub use rollout::{EvaluationRollout, RolloutRule, RolloutSegment, RolloutThreshold};
pub use rule::{EvaluationDistribution, EvaluationRule, MatchType};
