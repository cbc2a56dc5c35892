//! Turn a short piece of text into a password and score how strong it looks.
//!
//! The text has its whitespace removed, symbols and digits are inserted at
//! random positions, it is padded toward a minimum length and a three
//! character base-36 timestamp suffix is appended. The strength scorer is a
//! six-check heuristic meant for display only; none of this is a key
//! derivation scheme.
//!
//! ```rust,no_run
//! use textpass::generators::generate;
//! use textpass::models::GenerationOptions;
//! use textpass::strength::analyze_password_strength;
//!
//! let password = generate("hello", &GenerationOptions::display_defaults()).unwrap();
//! let assessment = analyze_password_strength(&password);
//! println!("{} {:.0} {}", password, assessment.score, assessment.label_text());
//! ```

pub mod api;
pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod strength;
pub mod utils;
