// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

/// An atomic typed predicate over a single context attribute.
///
/// `value` is always carried as a string and parsed according to
/// `comparison_type` at match time. A value that fails to parse makes the
/// constraint a non-match, never a hard error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
	#[serde(rename = "type")]
	pub comparison_type: ComparisonType,
	pub property: String,
	pub operator: ConstraintOperator,
	pub value: String,
}

impl Constraint {
	pub fn new(
		comparison_type: ComparisonType,
		property: impl Into<String>,
		operator: ConstraintOperator,
		value: impl Into<String>,
	) -> Self {
		Self {
			comparison_type,
			property: property.into(),
			operator,
			value: value.into(),
		}
	}
}

/// How a constraint's property and value are typed for comparison.
///
/// `EntityId` compares against the request's entity id rather than a context
/// attribute, with string semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonType {
	String,
	Number,
	Boolean,
	DateTime,
	EntityId,
}

/// The flat operator namespace shared by all comparison types.
///
/// Wire spellings follow the storage layer's flat constants. Which operators
/// apply to which comparison type is enforced by the matcher; an operator
/// outside its type's set never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintOperator {
	#[serde(rename = "eq")]
	Eq,
	#[serde(rename = "neq")]
	Neq,
	#[serde(rename = "lt")]
	Lt,
	#[serde(rename = "lte")]
	Lte,
	#[serde(rename = "gt")]
	Gt,
	#[serde(rename = "gte")]
	Gte,
	#[serde(rename = "empty")]
	Empty,
	#[serde(rename = "notempty")]
	NotEmpty,
	#[serde(rename = "prefix")]
	Prefix,
	#[serde(rename = "suffix")]
	Suffix,
	#[serde(rename = "present")]
	Present,
	#[serde(rename = "notpresent")]
	NotPresent,
	#[serde(rename = "isoneof")]
	IsOneOf,
	#[serde(rename = "isnotoneof")]
	IsNotOneOf,
	#[serde(rename = "contains")]
	Contains,
	#[serde(rename = "notcontains")]
	NotContains,
	#[serde(rename = "true")]
	True,
	#[serde(rename = "false")]
	False,
}
