//! Decoy - fake credentials and demo prompts for secret-scanner demos.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Fake secret + demo prompt report
//! │   ├── scan          # Credential pattern scan over text
//! │   ├── completions   # Shell completions
//! │   └── output        # Shared terminal output helpers
//! └── core/             # Core library components
//!     ├── token         # Random token generation (prefix + suffix)
//!     ├── prompt        # Demo prompt templates and composition
//!     └── scanner       # Credential pattern library and matching
//! ```
//!
//! # Features
//!
//! - Realistic-looking fake Stripe, GitHub, and AWS credentials
//! - Ready-made demo prompts with the fakes embedded
//! - Pattern scanner to round-trip a demo (generate → paste → detect)
//! - Seedable generator for reproducible output

pub mod cli;
pub mod core;
pub mod error;
