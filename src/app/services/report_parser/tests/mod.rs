//! Test modules for the Night Report parser
