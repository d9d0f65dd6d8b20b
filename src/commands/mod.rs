pub mod init;
pub mod members;
pub mod teams;
pub mod walkthrough;
