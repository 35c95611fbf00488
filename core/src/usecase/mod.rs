pub mod planner_session;
pub mod sample_day;
