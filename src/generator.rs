use crate::config::{IconConfig, IconKind, IconSpec};
use crate::error::{GenerationFailure, IconError};
use crate::processor::{self, PngOptions, TRANSPARENT};
use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use tokio::task;

/// A PNG icon that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub kind: IconKind,
    pub path: PathBuf,
    /// Canvas edge in pixels
    pub size: u32,
    /// Exact bytes written to `path`
    pub encoded: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcons {
    pub standard: GeneratedIcon,
    pub maskable: GeneratedIcon,
}

impl GeneratedIcons {
    /// Icons in the order they were written
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedIcon> {
        [&self.standard, &self.maskable].into_iter()
    }
}

/// Check the source logo can be opened for reading.
pub async fn verify_source(path: &Path) -> Result<(), IconError> {
    tokio::fs::File::open(path)
        .await
        .map(drop)
        .map_err(|source| IconError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })
}

/// Logo contain-fitted into a transparent `size x size` canvas.
pub fn render_standard(logo: &DynamicImage, spec: &IconSpec) -> RgbaImage {
    processor::resize_contain(logo, spec.size, spec.size, TRANSPARENT)
}

/// Logo contain-fitted into the safe-area square, then centered on a
/// transparent `size x size` canvas.
pub fn render_maskable(logo: &DynamicImage, spec: &IconSpec) -> RgbaImage {
    let edge = spec.maskable_edge();
    let safe_area = processor::resize_contain(logo, edge, edge, TRANSPARENT);

    let mut canvas = processor::blank_canvas(spec.size, spec.size, TRANSPARENT);
    processor::composite_centered(&mut canvas, &safe_area);
    canvas
}

pub async fn generate_standard_icon(
    source: &Path,
    spec: &IconSpec,
    output: &Path,
) -> Result<GeneratedIcon, IconError> {
    generate(IconKind::Standard, source, spec, output).await
}

pub async fn generate_maskable_icon(
    source: &Path,
    spec: &IconSpec,
    output: &Path,
) -> Result<GeneratedIcon, IconError> {
    generate(IconKind::Maskable, source, spec, output).await
}

async fn generate(
    kind: IconKind,
    source: &Path,
    spec: &IconSpec,
    output: &Path,
) -> Result<GeneratedIcon, IconError> {
    let source_path = source.to_path_buf();
    let spec = *spec;

    // Decode, resize and encode are CPU-bound
    let encoded = task::spawn_blocking(move || -> Result<Vec<u8>, GenerationFailure> {
        let logo = processor::decode(&source_path)?;
        log::debug!(
            "Decoded {} ({}x{}) for {} icon",
            source_path.display(),
            logo.width(),
            logo.height(),
            kind
        );

        let icon = match kind {
            IconKind::Standard => render_standard(&logo, &spec),
            IconKind::Maskable => render_maskable(&logo, &spec),
        };
        Ok(processor::encode_png(&icon, PngOptions::default())?)
    })
    .await
    .map_err(|e| IconError::generation(kind, output, e))?
    .map_err(|e| IconError::generation(kind, output, e))?;

    log::info!("Writing {} icon to {}", kind, output.display());
    processor::write(output, &encoded)
        .await
        .map_err(|e| IconError::generation(kind, output, e))?;
    log::info!("✓ Generated {} icon ({} bytes)", kind, encoded.len());

    Ok(GeneratedIcon {
        kind,
        path: output.to_path_buf(),
        size: spec.size,
        encoded,
    })
}

pub struct IconGenerator {
    config: IconConfig,
}

impl IconGenerator {
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    /// Verify the source, then write the standard and maskable icons in order.
    ///
    /// Stops at the first failure. A file written by an earlier step is left
    /// in place.
    pub async fn run(&self) -> Result<GeneratedIcons, IconError> {
        let IconConfig { spec, paths } = &self.config;

        log::info!("Generating site icons from {}", paths.source.display());
        match serde_json::to_string(&self.config) {
            Ok(json) => log::debug!("Icon config: {}", json),
            Err(e) => log::debug!("Icon config not serializable: {}", e),
        }

        verify_source(&paths.source).await?;
        let standard =
            generate_standard_icon(&paths.source, spec, paths.output(IconKind::Standard)).await?;
        let maskable =
            generate_maskable_icon(&paths.source, spec, paths.output(IconKind::Maskable)).await?;

        Ok(GeneratedIcons { standard, maskable })
    }
}
