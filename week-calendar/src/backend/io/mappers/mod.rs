pub mod window_mapper;

pub use window_mapper::WindowMapper;
