//! Unit tests for the item lookup module.
