mod concurrency;
mod strategy;
