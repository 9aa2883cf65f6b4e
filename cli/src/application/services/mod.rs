//! Application services for stack deployment.
//!
//! Each module is one focused use-case. Services import only from
//! `crate::domain` and `crate::application::ports`; all I/O is routed
//! through injected port traits.

pub mod deploy;
pub mod parents;
pub mod poll;
