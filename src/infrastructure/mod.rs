// Infrastructure layer module
// Contains database adapters

pub mod repositories;
