pub mod chord;
pub mod line;
pub mod pitch;
pub mod rendered;
pub mod segment;
pub mod transpose_state;
