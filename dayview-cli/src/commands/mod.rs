pub mod config;
pub mod init;
pub mod layout;
pub mod show;
