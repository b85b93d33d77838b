pub mod core;
pub mod poller;
pub mod refresher;
pub mod seeder;
pub mod submitter;
