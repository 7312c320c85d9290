//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod reservation_repo;
pub mod session_repo;
pub mod table_repo;
pub mod user_repo;

pub use reservation_repo::ReservationRepo;
pub use session_repo::SessionRepo;
pub use table_repo::TableRepo;
pub use user_repo::UserRepo;
