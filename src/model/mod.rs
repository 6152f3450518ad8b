pub mod phone;
pub mod birthday;
pub mod record;
pub mod directory;

// Re-exports for convenience
pub use phone::Phone;
pub use birthday::Birthday;
pub use record::Record;
pub use directory::Directory;
