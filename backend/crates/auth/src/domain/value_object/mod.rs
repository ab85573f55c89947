pub mod user_name;
pub mod user_password;
