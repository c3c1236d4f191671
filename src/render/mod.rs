pub mod renderer;

pub use renderer::{CELL_WIDTH, CellKind, Renderer, cell_kind};
