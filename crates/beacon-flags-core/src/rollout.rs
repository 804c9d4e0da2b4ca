// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::{Constraint, MatchType};

/// An ordered threshold-or-segment unit for a boolean flag.
///
/// Rollouts are walked in ascending `rank` order and the first one that hits
/// short-circuits evaluation with its value. Ranks must be strictly
/// increasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRollout {
	pub namespace_key: String,
	pub rank: i32,
	#[serde(flatten)]
	pub rule: RolloutRule,
}

/// The payload of a rollout, discriminated by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RolloutRule {
	Threshold(RolloutThreshold),
	Segment(RolloutSegment),
}

/// A percentage gate: entities bucketed below `percentage` get `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolloutThreshold {
	pub percentage: f64,
	pub value: bool,
}

/// A segment gate: entities matching the embedded constraints get `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolloutSegment {
	pub segment_key: String,
	pub segment_match_type: MatchType,
	pub value: bool,
	pub constraints: Vec<Constraint>,
}
