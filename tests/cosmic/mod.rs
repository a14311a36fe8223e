mod elements;
mod time;
