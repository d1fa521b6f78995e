pub mod init;
pub mod instance;
pub mod validate;
