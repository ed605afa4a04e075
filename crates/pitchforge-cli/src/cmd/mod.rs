pub mod brief;
pub mod case_study;
pub mod init;
pub mod login;
pub mod pitch;
