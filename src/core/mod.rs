pub mod add;
pub mod backup;
pub mod log;
pub mod report;
pub mod validator;
