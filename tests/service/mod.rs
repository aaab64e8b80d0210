mod poll;
mod review;
mod submission;
