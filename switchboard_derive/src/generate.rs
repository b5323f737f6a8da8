mod parser;
mod switch;
