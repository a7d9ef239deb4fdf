mod concurrency_tests;
mod message_tests;
