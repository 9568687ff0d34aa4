pub mod materializer;
pub mod packager;
pub mod transfer;
pub mod workflow;
