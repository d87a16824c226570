//! Live-server integration tests (run against a started server)

mod api_tests;
