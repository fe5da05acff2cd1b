pub mod cli;
pub mod config;
pub mod github;
pub mod output;
pub mod run;
pub mod selector;
pub mod storage;
