//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for barcode output. The IR is a
//! "bytecode" representation that sits between the emitters and raw PCL
//! bytes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────┐
//! │  Emitters   │ ──► │     IR      │ ──► │ Codegen  │
//! │ (bars/text) │     │  (Vec<Op>)  │     │ (bytes)  │
//! └─────────────┘     └─────────────┘     └──────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use barcode_pcl::ir::{Op, Program};
//!
//! let mut program = Program::new();
//! program.push(Op::MoveX(10.0));
//! program.push(Op::MoveY(10.0));
//! program.push(Op::Char('7'));
//!
//! assert_eq!(program.to_bytes(), b"\x1b&a100H\x1b&a100V7".to_vec());
//! ```

mod codegen;
mod ops;

// Re-export the ops types (codegen adds methods to Program via impl)
pub use ops::*;
