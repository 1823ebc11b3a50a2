pub mod error;
pub mod form;
pub mod response;
pub mod token;
pub mod user;
