pub mod date;
pub mod time_of_day;
