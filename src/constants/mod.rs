//! 定数のドメイン別分割
//!
//! `use crate::constants::*` でまとめて参照できるよう、
//! 全定数を再 export している。

mod health;
mod priority;
mod roles;
mod scoring;

pub use health::*;
pub use priority::*;
pub use roles::*;
pub use scoring::*;
