//! CyberGuardian: cybersecurity education dashboard API.
//!
//! In-memory catalog of threats, tools, glossary terms, blog posts and
//! analytics samples served over REST, plus a password-strength check and a
//! canned vulnerability-scan endpoint.

pub mod build_info;
pub mod checks;
pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod storage;
pub mod web;
