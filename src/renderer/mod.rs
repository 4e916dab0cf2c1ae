pub mod shader;
pub mod uniform_log;
pub mod uniforms;

use self::shader::ShaderFeatures;
use self::uniforms::UniformSet;

/// The external stage that turns uniforms into pixels.
///
/// Errors are handed back to the caller untouched; nothing here retries.
pub trait RenderStage {
    /// Rebuild the shader program for a new feature set.
    fn compile(&mut self, _features: &ShaderFeatures) -> anyhow::Result<()> {
        Ok(())
    }

    fn render(&mut self, uniforms: &UniformSet) -> anyhow::Result<()>;
}
