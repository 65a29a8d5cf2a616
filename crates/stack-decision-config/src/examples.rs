// crates/stack-decision-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic starting point for `stack-decision.toml`.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The example lists every key with its default value, so loading it yields
//! the same configuration as having no file at all.

/// Returns a canonical example `stack-decision.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"# stack-decision.toml

[input]
# Maximum size of one graph or descriptor file in bytes.
max_input_bytes = 4194304
# Maximum number of architecture graph nodes.
max_nodes = 10000
# Maximum number of architecture graph edges.
max_edges = 50000
# Maximum project description length in bytes.
max_description_bytes = 65536

[output]
# One of "json", "pretty", "summary".
format = "pretty"
# Attach the SHA-256 digest of the canonical report.
include_digest = true
# Keep scored candidate lists for every decision.
include_candidates = true

[logging]
# One of "error", "warn", "info", "debug", "trace".
level = "warn"
"#,
    )
}
