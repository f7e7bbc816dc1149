//! Unit tests for the federation directory.
