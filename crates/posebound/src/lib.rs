#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Scene depth bounds estimation.
pub mod bounds;

/// Sparse reconstruction to pose bounds conversion pipeline.
pub mod convert;

/// I/O utilities for reading sparse reconstructions and writing artifacts.
pub mod io;

/// 3D transforms algorithms.
pub mod transforms;
