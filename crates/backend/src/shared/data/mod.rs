pub mod db;
pub mod metadata;
