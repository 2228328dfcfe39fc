mod visitor_row;

pub use visitor_row::VisitorRow;
