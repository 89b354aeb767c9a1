pub mod compiler;
pub mod dispatch;
pub mod family;
pub mod init;
pub mod report;
pub mod schema;
pub mod shared;
pub mod verify;
