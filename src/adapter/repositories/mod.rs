//! Repository Implementations
//!
//! Domain層で定義されたRepository traitの具体実装

pub mod stdout_output_repository;
