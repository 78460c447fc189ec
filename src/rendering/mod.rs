/// Software raycast rendering pipeline
pub mod framebuffer;
pub mod raster;
pub mod shading;

pub use framebuffer::Framebuffer;
pub use raster::{RenderConfig, Renderer};
pub use shading::ShadingConfig;
