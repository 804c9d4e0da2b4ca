// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::Constraint;

/// An ordered segment-to-distribution binding for a variant flag.
///
/// Rules are evaluated in ascending `rank` order; the first rule whose
/// segment matches wins. Ranks must be strictly increasing, and the
/// evaluator re-validates this even though storage promises ordered results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRule {
	pub id: String,
	pub flag_key: String,
	pub segment_key: String,
	pub segment_match_type: MatchType,
	pub rank: i32,
	pub constraints: Vec<Constraint>,
}

/// How a segment combines its constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
	/// Every constraint must match. An empty constraint list matches.
	All,
	/// At least one constraint must match. An empty constraint list also
	/// matches, so a constraint-free segment acts as a wildcard.
	Any,
}

/// One slice of a matching rule's weighted variant split.
///
/// `rollout` is a percentage in `[0, 100]`; a rule's distributions are kept
/// in declaration order and their rollouts sum to at most 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationDistribution {
	pub rule_id: String,
	pub variant_key: String,
	pub rollout: f64,
}
