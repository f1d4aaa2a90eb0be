mod helpers;
mod fixture_tests;
