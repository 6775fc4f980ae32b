// private sub-module defined in other files
mod is_clockwise_order;
mod poly_area;
mod poly_ops;

// exports identifiers from private sub-modules in the current module namespace
pub use self::is_clockwise_order::is_clockwise_order;
pub use self::poly_area::{polygon_area, signed_area};
pub use self::poly_ops::{
    interior_point, point_in_poly, point_on_boundary, poly_in_poly, winding_number,
};
