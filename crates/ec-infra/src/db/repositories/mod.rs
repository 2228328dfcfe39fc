mod visitor_repo;

pub use visitor_repo::*;
