// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use tracing::{debug, instrument};

use beacon_flags_core::{
	BatchEvaluationRequest, BatchEvaluationResponse, BooleanEvaluationResponse,
	ErrorEvaluationResponse, EvaluationDistribution, EvaluationReason, EvaluationRequest,
	EvaluationResponse, Flag, FlagType, RolloutRule, VariantEvaluationResponse,
};

use crate::bucket::bucket;
use crate::error::{EvaluationError, Result};
use crate::matcher::segment_match;
use crate::store::EvaluationStore;

/// The flag evaluation service.
///
/// Stateless over a read-only store: every operation materializes what it
/// needs per request and shares nothing across calls, so a single instance
/// is safe to call concurrently without locks.
#[derive(Debug, Clone)]
pub struct Evaluation<S> {
	store: S,
}

impl<S> Evaluation<S>
where
	S: EvaluationStore,
{
	pub fn new(store: S) -> Self {
		Self { store }
	}

	/// Evaluates a variant flag: ordered rules, first matching segment,
	/// then distribution selection by bucket.
	#[instrument(skip(self, req), fields(
		namespace_key = %req.namespace_key,
		flag_key = %req.flag_key,
		entity_id = %req.entity_id,
	))]
	pub async fn variant(&self, req: &EvaluationRequest) -> Result<VariantEvaluationResponse> {
		let flag = self
			.store
			.get_flag(&req.namespace_key, &req.flag_key)
			.await?;

		if flag.flag_type != FlagType::Variant {
			return Err(EvaluationError::Invalid(format!(
				"flag type {} invalid",
				flag.flag_type
			)));
		}

		self.evaluate_variant(&flag, req).await
	}

	/// Evaluates a boolean flag: ordered rollouts, first hit wins, with the
	/// flag's enabled state as the fall-through value.
	#[instrument(skip(self, req), fields(
		namespace_key = %req.namespace_key,
		flag_key = %req.flag_key,
		entity_id = %req.entity_id,
	))]
	pub async fn boolean(&self, req: &EvaluationRequest) -> Result<BooleanEvaluationResponse> {
		let flag = self
			.store
			.get_flag(&req.namespace_key, &req.flag_key)
			.await?;

		if flag.flag_type != FlagType::Boolean {
			return Err(EvaluationError::Invalid(format!(
				"flag type {} invalid",
				flag.flag_type
			)));
		}

		self.evaluate_boolean(&flag, req).await
	}

	/// Evaluates a batch of requests in input order.
	///
	/// A missing flag becomes a per-request error response and the batch
	/// continues; any other failure aborts the whole batch.
	#[instrument(skip(self, req), fields(requests = req.requests.len()))]
	pub async fn batch(&self, req: BatchEvaluationRequest) -> Result<BatchEvaluationResponse> {
		let mut responses = Vec::with_capacity(req.requests.len());

		for request in &req.requests {
			let flag = match self
				.store
				.get_flag(&request.namespace_key, &request.flag_key)
				.await
			{
				Ok(flag) => flag,
				Err(err) if err.is_not_found() => {
					debug!(flag_key = %request.flag_key, "flag not found in batch");
					responses.push(EvaluationResponse::error(ErrorEvaluationResponse {
						flag_key: request.flag_key.clone(),
						namespace_key: request.namespace_key.clone(),
						reason: EvaluationReason::FlagNotFound,
					}));
					continue;
				}
				Err(err) => return Err(err),
			};

			match flag.flag_type {
				FlagType::Variant => {
					let response = self.evaluate_variant(&flag, request).await?;
					responses.push(EvaluationResponse::variant(response));
				}
				FlagType::Boolean => {
					let response = self.evaluate_boolean(&flag, request).await?;
					responses.push(EvaluationResponse::boolean(response));
				}
				FlagType::Unknown(other) => {
					return Err(EvaluationError::Invalid(format!(
						"unknown flag type: {other}"
					)));
				}
			}
		}

		Ok(BatchEvaluationResponse { responses })
	}

	async fn evaluate_variant(
		&self,
		flag: &Flag,
		req: &EvaluationRequest,
	) -> Result<VariantEvaluationResponse> {
		let mut response = VariantEvaluationResponse {
			request_id: req.request_id.clone(),
			flag_key: req.flag_key.clone(),
			..Default::default()
		};

		if !flag.enabled {
			debug!("flag disabled");
			response.reason = EvaluationReason::FlagDisabled;
			return Ok(response);
		}

		let rules = self
			.store
			.get_evaluation_rules(&req.namespace_key, &req.flag_key)
			.await?;

		let mut last_rank: Option<i32> = None;
		for rule in &rules {
			if last_rank.is_some_and(|rank| rule.rank <= rank) {
				return Err(EvaluationError::Invalid(format!(
					"rule rank: {} detected out of order",
					rule.rank
				)));
			}
			last_rank = Some(rule.rank);

			if !segment_match(
				&rule.constraints,
				rule.segment_match_type,
				&req.context,
				&req.entity_id,
			) {
				continue;
			}

			// First matching rule wins; later rules are never consulted.
			response.reason = EvaluationReason::Match;
			response.segment_key = rule.segment_key.clone();

			let distributions = self.store.get_evaluation_distributions(&rule.id).await?;

			if distributions.is_empty() {
				debug!(segment_key = %rule.segment_key, "matched rule with no distributions");
				response.r#match = true;
				return Ok(response);
			}

			let b = bucket(&req.flag_key, &req.entity_id);
			match select_distribution(&distributions, b) {
				Some(distribution) => {
					debug!(
						segment_key = %rule.segment_key,
						variant_key = %distribution.variant_key,
						bucket = b,
						"matched distribution"
					);
					response.r#match = true;
					response.variant_key = distribution.variant_key.clone();
				}
				None => {
					// In the segment but past every slice of the split.
					debug!(segment_key = %rule.segment_key, bucket = b, "bucket outside distributions");
					response.r#match = false;
				}
			}

			return Ok(response);
		}

		debug!("no rule matched");
		response.reason = EvaluationReason::Unknown;
		Ok(response)
	}

	async fn evaluate_boolean(
		&self,
		flag: &Flag,
		req: &EvaluationRequest,
	) -> Result<BooleanEvaluationResponse> {
		let rollouts = self
			.store
			.get_evaluation_rollouts(&req.namespace_key, &req.flag_key)
			.await?;

		let mut last_rank: Option<i32> = None;
		for rollout in &rollouts {
			if last_rank.is_some_and(|rank| rollout.rank <= rank) {
				return Err(EvaluationError::Invalid(format!(
					"rollout rank: {} detected out of order",
					rollout.rank
				)));
			}
			last_rank = Some(rollout.rank);

			match &rollout.rule {
				RolloutRule::Threshold(threshold) => {
					let b = bucket(&req.flag_key, &req.entity_id);
					let normalized = (threshold.percentage * 10.0) as u32;
					if b < normalized {
						debug!(bucket = b, threshold = normalized, "threshold rollout matched");
						return Ok(BooleanEvaluationResponse {
							request_id: req.request_id.clone(),
							value: threshold.value,
							reason: EvaluationReason::Match,
							flag_key: req.flag_key.clone(),
						});
					}
				}
				RolloutRule::Segment(segment) => {
					if segment_match(
						&segment.constraints,
						segment.segment_match_type,
						&req.context,
						&req.entity_id,
					) {
						debug!(segment_key = %segment.segment_key, "segment rollout matched");
						return Ok(BooleanEvaluationResponse {
							request_id: req.request_id.clone(),
							value: segment.value,
							reason: EvaluationReason::Match,
							flag_key: req.flag_key.clone(),
						});
					}
				}
			}
		}

		// No rollout hit: the flag's enabled state is the answer.
		Ok(BooleanEvaluationResponse {
			request_id: req.request_id.clone(),
			value: flag.enabled,
			reason: EvaluationReason::Default,
			flag_key: req.flag_key.clone(),
		})
	}
}

/// Walks distributions in declaration order, accumulating each slice's
/// rollout scaled to tenths of a percent, and returns the distribution whose
/// cumulative range contains `bucket`. A bucket at or past the cumulative
/// sum selects nothing.
///
/// Each cumulative boundary is rounded to the nearest bucket. Rounding the
/// running sum, rather than truncating per slice, keeps fractional splits
/// that sum to exactly 100 covering all 1000 buckets: 33.34/33.33/33.33
/// yields boundaries 333/667/1000, not 333/666/999.
fn select_distribution(
	distributions: &[EvaluationDistribution],
	bucket: u32,
) -> Option<&EvaluationDistribution> {
	let mut sum = 0.0f64;
	for distribution in distributions {
		sum += distribution.rollout * 10.0;
		if i64::from(bucket) < sum.round() as i64 {
			return Some(distribution);
		}
	}
	None
}
