//! Target language modules. Go is the only target today.

pub mod go;
