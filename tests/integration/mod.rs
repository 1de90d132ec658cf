//! Integration tests for the relman CLI

mod helpers;
mod test_create_release;
