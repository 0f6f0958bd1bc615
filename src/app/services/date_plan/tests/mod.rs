//! Test modules for the date-plan parser

mod date_header_tests;
