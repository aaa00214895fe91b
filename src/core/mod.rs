pub mod access;
pub mod audit;
pub mod catalog;
pub mod docgen;
pub mod projects;
pub mod specs;
