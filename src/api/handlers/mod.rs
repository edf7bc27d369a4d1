pub mod albums;
pub mod health;
