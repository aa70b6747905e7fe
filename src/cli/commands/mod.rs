pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod projects;
pub mod shell;
pub mod status;
pub mod summary;
pub mod track;
