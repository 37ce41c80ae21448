pub mod chat;
pub mod checklist;
pub mod job;
pub mod mentor;
pub mod profile;
