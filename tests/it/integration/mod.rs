//! Integration tests for Atelier.
//!
//! These tests verify the interaction between multiple components
//! and test complete workflows end-to-end.

mod carousel_workflow_tests;
mod enquiry_workflow_tests;
mod gallery_workflow_tests;
