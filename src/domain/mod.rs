// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod album;
pub mod repositories;
