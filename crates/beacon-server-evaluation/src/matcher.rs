// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

use beacon_flags_core::{ComparisonType, Constraint, ConstraintOperator, MatchType};

/// Evaluates a segment's constraints against a request context.
///
/// `All` requires every constraint to match, `Any` at least one. An empty
/// constraint list matches under both: a constraint-free segment is a
/// deliberate wildcard.
pub fn segment_match(
	constraints: &[Constraint],
	match_type: MatchType,
	context: &HashMap<String, String>,
	entity_id: &str,
) -> bool {
	if constraints.is_empty() {
		return true;
	}

	match match_type {
		MatchType::All => constraints
			.iter()
			.all(|c| constraint_match(c, context, entity_id)),
		MatchType::Any => constraints
			.iter()
			.any(|c| constraint_match(c, context, entity_id)),
	}
}

/// Evaluates a single constraint.
///
/// The property is looked up in the context map, except for `entity_id`
/// constraints, which match on the request's entity id. An absent property
/// behaves as the empty string; a parse failure on either side of a
/// comparison is a non-match, never an error.
pub fn constraint_match(
	constraint: &Constraint,
	context: &HashMap<String, String>,
	entity_id: &str,
) -> bool {
	let value = match constraint.comparison_type {
		ComparisonType::EntityId => entity_id,
		_ => context
			.get(&constraint.property)
			.map(String::as_str)
			.unwrap_or(""),
	};

	match constraint.comparison_type {
		ComparisonType::String | ComparisonType::EntityId => {
			matches_string(constraint.operator, value, &constraint.value)
		}
		ComparisonType::Number => matches_number(constraint.operator, value, &constraint.value),
		ComparisonType::Boolean => matches_boolean(constraint.operator, value),
		ComparisonType::DateTime => matches_datetime(constraint.operator, value, &constraint.value),
	}
}

fn matches_string(operator: ConstraintOperator, value: &str, constraint_value: &str) -> bool {
	match operator {
		ConstraintOperator::Eq => value == constraint_value,
		ConstraintOperator::Neq => value != constraint_value,
		ConstraintOperator::Empty => value.is_empty(),
		ConstraintOperator::NotEmpty => !value.is_empty(),
		ConstraintOperator::Present => !value.is_empty(),
		ConstraintOperator::NotPresent => value.is_empty(),
		ConstraintOperator::Prefix => value.starts_with(constraint_value),
		ConstraintOperator::Suffix => value.ends_with(constraint_value),
		ConstraintOperator::Contains => value.contains(constraint_value),
		ConstraintOperator::NotContains => !value.contains(constraint_value),
		ConstraintOperator::IsOneOf => one_of_strings(constraint_value)
			.map(|values| values.iter().any(|v| v == value))
			.unwrap_or(false),
		ConstraintOperator::IsNotOneOf => one_of_strings(constraint_value)
			.map(|values| !values.iter().any(|v| v == value))
			.unwrap_or(false),
		_ => false,
	}
}

fn matches_number(operator: ConstraintOperator, value: &str, constraint_value: &str) -> bool {
	match operator {
		ConstraintOperator::Present => return !value.is_empty(),
		ConstraintOperator::NotPresent => return value.is_empty(),
		_ => {}
	}

	let Ok(value) = value.parse::<f64>() else {
		return false;
	};

	match operator {
		ConstraintOperator::IsOneOf => one_of_numbers(constraint_value)
			.map(|values| values.contains(&value))
			.unwrap_or(false),
		ConstraintOperator::IsNotOneOf => one_of_numbers(constraint_value)
			.map(|values| !values.contains(&value))
			.unwrap_or(false),
		_ => {
			let Ok(constraint_value) = constraint_value.parse::<f64>() else {
				return false;
			};

			match operator {
				ConstraintOperator::Eq => value == constraint_value,
				ConstraintOperator::Neq => value != constraint_value,
				ConstraintOperator::Lt => value < constraint_value,
				ConstraintOperator::Lte => value <= constraint_value,
				ConstraintOperator::Gt => value > constraint_value,
				ConstraintOperator::Gte => value >= constraint_value,
				_ => false,
			}
		}
	}
}

fn matches_boolean(operator: ConstraintOperator, value: &str) -> bool {
	match operator {
		ConstraintOperator::Present => return !value.is_empty(),
		ConstraintOperator::NotPresent => return value.is_empty(),
		_ => {}
	}

	let Ok(value) = value.parse::<bool>() else {
		return false;
	};

	match operator {
		ConstraintOperator::True => value,
		ConstraintOperator::False => !value,
		_ => false,
	}
}

fn matches_datetime(operator: ConstraintOperator, value: &str, constraint_value: &str) -> bool {
	match operator {
		ConstraintOperator::Present => return !value.is_empty(),
		ConstraintOperator::NotPresent => return value.is_empty(),
		_ => {}
	}

	let (Ok(value), Ok(constraint_value)) = (parse_datetime(value), parse_datetime(constraint_value))
	else {
		return false;
	};

	match operator {
		ConstraintOperator::Eq => value == constraint_value,
		ConstraintOperator::Neq => value != constraint_value,
		ConstraintOperator::Lt => value < constraint_value,
		ConstraintOperator::Lte => value <= constraint_value,
		ConstraintOperator::Gt => value > constraint_value,
		ConstraintOperator::Gte => value >= constraint_value,
		_ => false,
	}
}

// RFC3339 instants; offsets are honored so 10:00+02:00 equals 08:00Z.
fn parse_datetime(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
	DateTime::parse_from_rfc3339(value)
}

fn one_of_strings(constraint_value: &str) -> Result<Vec<String>, serde_json::Error> {
	serde_json::from_str(constraint_value)
}

fn one_of_numbers(constraint_value: &str) -> Result<Vec<f64>, serde_json::Error> {
	serde_json::from_str(constraint_value)
}
