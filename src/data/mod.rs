pub mod bounds;
pub mod selection;
pub mod series_look;
pub mod table;
