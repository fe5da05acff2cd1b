pub mod corpus;
pub mod issues;
