//! # Transpo Core
//!
//! Core library for Transpo - classical transposition ciphers with a thin
//! web and CLI front end.
//!
//! This crate provides the cipher algorithms, input validation and request
//! processing independent of any presentation layer. Nothing here performs
//! I/O or keeps state between calls.
//!
//! ## Architecture
//!
//! - **cipher**: `Cipher` trait, Rail Fence and Row Transposition encoders
//! - **validation**: Turning raw user strings into validated keys
//! - **request**: Running every requested cipher over one message
//! - **error**: User-facing validation errors
//!
//! These ciphers are not secure. They are teaching tools.

pub mod cipher;
pub mod error;
pub mod request;
pub mod validation;

pub use cipher::{Cipher, CipherKind, RailFenceCipher, RowTranspositionCipher};
pub use error::{RailCountProblem, Result, ValidationError};
pub use request::{
    encrypt_request, CipherKey, CipherResult, EncryptionOutcome, EncryptionRequest, Rejection,
};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
