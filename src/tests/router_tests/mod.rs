mod account_tests;
mod dashboard_tests;
mod pages_tests;
mod schedule_tests;
