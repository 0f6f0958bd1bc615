//! Test modules for the defect-update parser

mod fields_tests;
