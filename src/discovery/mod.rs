//! Source tree discovery: file matching, enumeration and directory mirroring

pub mod directory;
pub mod filter;
pub mod mirror;

pub use directory::find_matching_files;
pub use filter::has_extension;
pub use mirror::mirror_directory_tree;
