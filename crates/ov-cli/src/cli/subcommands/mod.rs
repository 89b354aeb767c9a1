mod compiler;
mod family;
mod report;
mod verify;

pub use compiler::CompilerCommands;
pub use family::FamilyCommands;
pub use report::ReportCommands;
pub use verify::VerifyCommands;
