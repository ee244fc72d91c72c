pub mod actual_data;
pub mod line_points;
pub mod passenger_counts;
pub mod read_ops;
pub mod service_points;
