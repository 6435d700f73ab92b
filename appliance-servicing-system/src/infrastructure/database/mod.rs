pub mod orm;
pub use orm::OrmRepo;
