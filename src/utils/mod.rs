//! Utility modules for common functionality
//!
//! This module provides various utility functions and types used throughout the application.

pub mod logger;
pub(crate) mod format_utils;
pub mod document_utils;
