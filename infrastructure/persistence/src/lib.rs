pub mod db;
pub mod migration;
pub mod schema;
pub mod seeder;
