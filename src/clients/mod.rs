pub mod interview_client;

pub use interview_client::{endpoints, HttpInterviewApi, InterviewApi};
