pub mod expansion;
pub mod providers;
pub mod ranking;
pub mod recommendations;
