// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod approaches;
pub mod config;
pub mod error;
pub mod igci;
pub mod traits;
pub mod utils;
pub mod validation;

pub use error::{IgciError, IgciWarning, Variable};
pub use traits::{CausalDirection, CausalScore, GlobalValue};
