pub mod movie;
pub mod session;
pub mod theater;
pub mod ticket;
pub mod user;
