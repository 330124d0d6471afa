pub mod add;
pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod menu;
pub mod recent;
pub mod top;
