pub mod export;
pub mod init;
pub mod render;
