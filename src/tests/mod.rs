// Test modules for deepsearcher-llm
//
// Each source file has a corresponding test file focused on its business
// behaviour. Provider contract tests live in `providers/tests/`; HTTP tests
// against a mock server live in the crate's `tests/` directory.

// Test doubles and fixed environments
pub mod helpers;
