pub mod common;

mod document_tests;
mod user_tests;
