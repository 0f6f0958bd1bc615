//! Test modules for the handover parser

mod parser_tests;
