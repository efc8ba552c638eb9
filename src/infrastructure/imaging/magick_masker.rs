use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{ImageMasker, ImageMaskerError};
use crate::domain::MaskJob;
use crate::infrastructure::process::{CommandError, run_bounded};

use super::mask_profile::MaskProfiles;

/// ImageMagick-backed masker: crops the chrome margins, then repaints every
/// pixel near a job's target colors with the job's fill color, writing the
/// variant next to the source image.
pub struct MagickMasker {
    convert_bin: PathBuf,
    profiles: MaskProfiles,
    timeout: Duration,
}

impl MagickMasker {
    pub fn new(convert_bin: PathBuf, profiles: MaskProfiles, timeout: Duration) -> Self {
        Self {
            convert_bin,
            profiles,
            timeout,
        }
    }
}

#[async_trait]
impl ImageMasker for MagickMasker {
    async fn mask(&self, source: &Path, job: MaskJob) -> Result<PathBuf, ImageMaskerError> {
        let profile = self.profiles.for_job(job);
        let output_path = masked_variant_path(source, job);

        let mut cmd = Command::new(&self.convert_bin);
        cmd.arg(source)
            .args(["-gravity", "North", "-chop"])
            .arg(format!("0x{}", self.profiles.crop.top))
            .args(["-gravity", "South", "-chop"])
            .arg(format!("0x{}", self.profiles.crop.bottom))
            .arg("+repage")
            .arg("-fuzz")
            .arg(format!("{}%", profile.fuzz_percent))
            .args(["-fill", profile.fill.as_str()]);
        for target in &profile.targets {
            cmd.args(["-opaque", target]);
        }
        cmd.arg(&output_path);

        tracing::debug!(job = %job, output = %output_path.display(), "Masking image");

        let output = run_bounded(&mut cmd, self.timeout)
            .await
            .map_err(|e| match e {
                CommandError::Spawn(e) => ImageMaskerError::InvocationFailed(e.to_string()),
                CommandError::TimedOut(secs) => ImageMaskerError::TimedOut(secs),
            })?;

        // A failed convert leaves no usable variant behind; exit status is
        // authoritative here, unlike the OCR pass.
        if !output.status.success() {
            return Err(ImageMaskerError::CommandFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output_path)
    }
}

fn masked_variant_path(source: &Path, job: MaskJob) -> PathBuf {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    source.with_file_name(format!("{}-{}.png", name, job))
}
