//! Store contract tests, run against every backend.
