pub mod session;
pub mod tweets;
