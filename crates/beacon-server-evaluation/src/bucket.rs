// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Number of buckets an entity can land in. Percentages throughout the
/// system are scaled by 10 against this space, giving 0.1% resolution.
pub const BUCKET_COUNT: u32 = 1000;

/// Places an entity into a bucket in `[0, BUCKET_COUNT)`.
///
/// The placement is CRC32-IEEE over `salt`, `":"`, `entity_id`, reduced mod
/// [`BUCKET_COUNT`]. The salt is the flag key, both for variant
/// distributions and boolean threshold rollouts.
///
/// The hash algorithm, the `":"` separator, and the modulus are frozen:
/// every evaluator instance, in every language, must place the same entity
/// in the same bucket, across releases. Changing any of the three silently
/// re-buckets every entity and requires an explicit migration.
pub fn bucket(salt: &str, entity_id: &str) -> u32 {
	let mut hasher = crc32fast::Hasher::new();
	hasher.update(salt.as_bytes());
	hasher.update(b":");
	hasher.update(entity_id.as_bytes());
	hasher.finalize() % BUCKET_COUNT
}
