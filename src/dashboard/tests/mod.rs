//! Unit tests for the dashboard reports.

mod support;

mod workload_tests;
