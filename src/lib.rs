// Advisor: course recommendations from enrollment history.
//
// This is the library root. Each module corresponds to one stage of the
// recommendation pipeline.

pub mod catalog;
pub mod config;
pub mod courses;
pub mod db;
pub mod engine;
pub mod output;
pub mod status;
