// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single flag evaluation request.
///
/// `entity_id` is what gets bucketed for percentage placement; `context` is
/// the attribute map constraints are matched against. An `entity_id`
/// constraint matches on `entity_id` as if it were a context value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
	/// Caller-supplied correlation id, carried through to the response
	/// verbatim. Never generated server-side.
	#[serde(default)]
	pub request_id: Option<String>,
	pub namespace_key: String,
	pub flag_key: String,
	pub entity_id: String,
	#[serde(default)]
	pub context: HashMap<String, String>,
}

impl EvaluationRequest {
	pub fn new(
		namespace_key: impl Into<String>,
		flag_key: impl Into<String>,
		entity_id: impl Into<String>,
	) -> Self {
		Self {
			request_id: None,
			namespace_key: namespace_key.into(),
			flag_key: flag_key.into(),
			entity_id: entity_id.into(),
			context: HashMap::new(),
		}
	}

	pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
		self.request_id = Some(request_id.into());
		self
	}

	pub fn with_context_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.context.insert(key.into(), value.into());
		self
	}
}

/// Why an evaluation produced the answer it did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvaluationReason {
	#[default]
	Unknown,
	Match,
	FlagDisabled,
	FlagNotFound,
	Default,
}

/// The outcome of evaluating a variant flag.
///
/// `match` with an empty `variant_key` means the entity landed in the rule's
/// segment but the rule carries no distributions; `match == false` with
/// reason `MATCH` means the entity's bucket fell past the cumulative
/// distribution sum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantEvaluationResponse {
	#[serde(default)]
	pub request_id: Option<String>,
	pub r#match: bool,
	pub segment_key: String,
	pub variant_key: String,
	pub reason: EvaluationReason,
	pub flag_key: String,
}

/// The outcome of evaluating a boolean flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BooleanEvaluationResponse {
	#[serde(default)]
	pub request_id: Option<String>,
	pub value: bool,
	pub reason: EvaluationReason,
	pub flag_key: String,
}

/// A per-request failure inside a batch that did not abort the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEvaluationResponse {
	pub flag_key: String,
	pub namespace_key: String,
	pub reason: EvaluationReason,
}

/// Discriminator for the payload carried by an [`EvaluationResponse`].
///
/// Explicit on the wire so clients dispatch on the tag instead of sniffing
/// payload shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvaluationResponseType {
	#[serde(rename = "VARIANT_EVALUATION_RESPONSE_TYPE")]
	Variant,
	#[serde(rename = "BOOLEAN_EVALUATION_RESPONSE_TYPE")]
	Boolean,
	#[serde(rename = "ERROR_EVALUATION_RESPONSE_TYPE")]
	Error,
}

/// One slot of a batch response: an explicit type tag plus the payload.
///
/// Constructed through [`EvaluationResponse::variant`] and friends so the
/// tag and payload cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResponse {
	#[serde(rename = "type")]
	pub response_type: EvaluationResponseType,
	pub response: EvaluationResponseBody,
}

/// The payload side of an [`EvaluationResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvaluationResponseBody {
	Variant(VariantEvaluationResponse),
	Boolean(BooleanEvaluationResponse),
	Error(ErrorEvaluationResponse),
}

impl EvaluationResponse {
	pub fn variant(response: VariantEvaluationResponse) -> Self {
		Self {
			response_type: EvaluationResponseType::Variant,
			response: EvaluationResponseBody::Variant(response),
		}
	}

	pub fn boolean(response: BooleanEvaluationResponse) -> Self {
		Self {
			response_type: EvaluationResponseType::Boolean,
			response: EvaluationResponseBody::Boolean(response),
		}
	}

	pub fn error(response: ErrorEvaluationResponse) -> Self {
		Self {
			response_type: EvaluationResponseType::Error,
			response: EvaluationResponseBody::Error(response),
		}
	}
}

/// A positional fan-out of evaluation requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchEvaluationRequest {
	pub requests: Vec<EvaluationRequest>,
}

/// Responses positionally aligned with the batch request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchEvaluationResponse {
	pub responses: Vec<EvaluationResponse>,
}
