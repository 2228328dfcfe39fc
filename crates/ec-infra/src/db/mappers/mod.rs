pub mod visitor_mapper;
