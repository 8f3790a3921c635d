#![allow(clippy::large_enum_variant)]
#![allow(clippy::type_complexity)]
#![allow(clippy::match_like_matches_macro)]

//! A kernel for Japanese morphological analysis aimed at language learners:
//! bidirectional verb/adjective conjugation, a JMdict-simplified-backed
//! dictionary index, a compositional grammar-phrase catalogue, and a
//! pipeline that turns tokenizer output into annotated, glossed tokens with
//! English translation hints.
//!
//! The crate never ships its own tokenizer — [`morpheme::Segmenter`] is the
//! boundary a real morphological analyzer plugs into.

pub mod config;
pub mod conjugate;
pub mod dictionary;
pub mod dirs;
pub mod error;
pub mod grouper;
pub mod kana;
pub mod morpheme;
pub mod phrase;
pub mod pipeline;
pub mod reporter;
pub mod services;

pub use self::dirs::Dirs;
pub use self::error::{KernelError, Result};
pub use self::services::Services;
