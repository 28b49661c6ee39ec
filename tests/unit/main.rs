//! Unit test modules.

mod config_test;
mod distributor_test;
mod plan_validation_test;
mod session_engine_test;
