pub mod audience;
pub mod catalog;
pub mod college;
pub mod profile;
pub mod scholarship;
