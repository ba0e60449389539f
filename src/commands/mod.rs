pub mod init;
pub mod score;
