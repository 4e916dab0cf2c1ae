use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use super::shader::ShaderFeatures;
use super::uniforms::UniformSet;
use super::RenderStage;

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum Record<'a> {
    Compile { defines: Vec<String> },
    Frame { frame: u64, uniforms: &'a UniformSet },
}

/// Headless render stage: writes every compile and frame as one JSON line.
pub struct UniformLog<W: Write> {
    out: W,
    frames: u64,
    compiles: u64,
}

impl<W: Write> UniformLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            frames: 0,
            compiles: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn compiles(&self) -> u64 {
        self.compiles
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, record: &Record<'_>) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.out, record).context("failed to encode record")?;
        self.out
            .write_all(b"\n")
            .context("failed to write uniform log")?;
        Ok(())
    }
}

impl<W: Write> RenderStage for UniformLog<W> {
    fn compile(&mut self, features: &ShaderFeatures) -> anyhow::Result<()> {
        self.write(&Record::Compile {
            defines: features.defines(),
        })?;
        self.compiles += 1;
        Ok(())
    }

    fn render(&mut self, uniforms: &UniformSet) -> anyhow::Result<()> {
        self.write(&Record::Frame {
            frame: self.frames,
            uniforms,
        })?;
        self.frames += 1;
        Ok(())
    }
}
