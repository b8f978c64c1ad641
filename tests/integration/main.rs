//! Integration tests for xoterm

mod helpers;

mod cli_test;
mod exec_test;
mod render_test;
mod session_test;
