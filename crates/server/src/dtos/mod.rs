pub mod data;
pub mod greeting;
pub mod health;
