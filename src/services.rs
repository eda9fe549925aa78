pub mod movie_service;
pub use movie_service::MovieService;
pub mod theater_service;
pub use theater_service::TheaterService;
pub mod session_service;
pub use session_service::SessionService;
pub mod ticket_service;
pub use ticket_service::TicketService;
pub mod user_service;
pub use user_service::UserService;

#[cfg(test)]
pub(crate) mod fixtures;
