pub mod movies;
pub mod sessions;
pub mod theaters;
pub mod tickets;
pub mod users;
