//! Post storage and database connection management.

mod connections;
mod memory;

#[cfg(feature = "database")]
mod seaorm_base;
#[cfg(feature = "database")]
pub mod seaorm_repo;

#[cfg(feature = "database")]
pub mod entity;

pub use connections::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "database")]
pub use connections::connect;
#[cfg(feature = "database")]
pub use seaorm_repo::SeaOrmPostRepository;
