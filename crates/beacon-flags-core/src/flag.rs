// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

/// A feature flag as surfaced by storage for evaluation.
///
/// Flag identity is `(namespace_key, key)`; namespaces partition all keyed
/// entities and both parts are opaque case-sensitive strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flag {
	pub namespace_key: String,
	pub key: String,
	pub enabled: bool,
	#[serde(rename = "type")]
	pub flag_type: FlagType,
}

impl Flag {
	pub fn new(namespace_key: impl Into<String>, key: impl Into<String>, flag_type: FlagType) -> Self {
		Self {
			namespace_key: namespace_key.into(),
			key: key.into(),
			enabled: false,
			flag_type,
		}
	}

	pub fn enabled(mut self, enabled: bool) -> Self {
		self.enabled = enabled;
		self
	}
}

/// The type of a flag, dictating which evaluation pipeline applies.
///
/// Stored as an integer on the wire. Values outside the known set are
/// preserved rather than rejected so the evaluator can report them; a flag
/// with an unknown type fails evaluation, it does not fail decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum FlagType {
	Variant,
	Boolean,
	Unknown(i32),
}

impl From<i32> for FlagType {
	fn from(value: i32) -> Self {
		match value {
			0 => FlagType::Variant,
			1 => FlagType::Boolean,
			other => FlagType::Unknown(other),
		}
	}
}

impl From<FlagType> for i32 {
	fn from(value: FlagType) -> Self {
		match value {
			FlagType::Variant => 0,
			FlagType::Boolean => 1,
			FlagType::Unknown(other) => other,
		}
	}
}

impl std::fmt::Display for FlagType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FlagType::Variant => write!(f, "VARIANT_FLAG_TYPE"),
			FlagType::Boolean => write!(f, "BOOLEAN_FLAG_TYPE"),
			FlagType::Unknown(other) => write!(f, "{}", other),
		}
	}
}
