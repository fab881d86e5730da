//! Sea-ORM entities for the auth tables

pub mod sessions;
pub mod users;
pub mod users_auth;
