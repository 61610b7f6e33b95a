pub mod db_utils;
pub mod initialize;
pub mod pool;
pub mod queries;
