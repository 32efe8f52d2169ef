// CscMatrix construction, compression from triplets and
// the dense / sparse column views.   Everything here is
// implemented directly on the types in matrix_types.

mod accessors;
mod core;
mod triplets;
mod utils;
