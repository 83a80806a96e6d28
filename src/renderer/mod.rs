//! Rendering: scene assembly and the wgpu pipeline

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::scene_vertices;
pub use vertex::Vertex;
