//! Unit tests for chartboard.
