pub mod add;
pub mod auth;
pub mod remote;
pub mod render;
pub mod validate;
