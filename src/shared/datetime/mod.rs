pub mod flight_time;
