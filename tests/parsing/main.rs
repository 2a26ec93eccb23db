mod errors;
mod journal;
mod parser;
mod samples;
