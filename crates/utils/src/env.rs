// Copyright 2025 Irreducible Inc.

/// Whether `value` spells an enabled boolean flag.
pub fn is_truthy(value: &str) -> bool {
	["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&value)
}

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	std::env::var(flag).is_ok_and(|value| is_truthy(&value))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_truthy_values() {
		assert!(is_truthy("1"));
		assert!(is_truthy("yes"));
		assert!(!is_truthy("0"));
		assert!(!is_truthy(""));
		assert!(!is_truthy("True "));
	}

	#[test]
	fn test_unset_flag() {
		assert!(!boolean_env_flag_set("HASHBLOCK_UTILS_TEST_FLAG_NEVER_SET"));
	}
}
