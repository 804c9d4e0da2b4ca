// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;

use beacon_flags_core::{EvaluationDistribution, EvaluationRollout, EvaluationRule, Flag};

use crate::error::Result;

/// The read contract the evaluator consumes.
///
/// Implementations are expected to be cache-coherent to the caller; the
/// evaluator materializes everything fresh per request and holds no state
/// across calls. All methods may suspend awaiting I/O; dropping the
/// in-flight future cancels the evaluation with no partial state escaping.
#[async_trait]
pub trait EvaluationStore: Send + Sync {
	/// Fetches a flag by `(namespace_key, key)`. A missing flag is the
	/// `NotFound` error kind, which batch evaluation converts into a
	/// per-request error response.
	async fn get_flag(&self, namespace_key: &str, key: &str) -> Result<Flag>;

	/// Fetches a variant flag's rules, ordered by ascending rank.
	async fn get_evaluation_rules(
		&self,
		namespace_key: &str,
		flag_key: &str,
	) -> Result<Vec<EvaluationRule>>;

	/// Fetches a rule's distributions in declaration order.
	async fn get_evaluation_distributions(
		&self,
		rule_id: &str,
	) -> Result<Vec<EvaluationDistribution>>;

	/// Fetches a boolean flag's rollouts, ordered by ascending rank. The
	/// evaluator still validates the ordering rather than trusting it.
	async fn get_evaluation_rollouts(
		&self,
		namespace_key: &str,
		flag_key: &str,
	) -> Result<Vec<EvaluationRollout>>;
}
