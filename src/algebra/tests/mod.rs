mod accessors;
mod matrix;
