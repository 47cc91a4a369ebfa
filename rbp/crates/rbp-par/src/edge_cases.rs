//! Edge case and end-to-end tests for rbp-par.
