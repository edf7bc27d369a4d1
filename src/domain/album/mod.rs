// Album domain module

#![allow(clippy::module_inception)]

pub mod album;

pub use album::Album;
