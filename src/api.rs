use crate::{
    apply::{self, Summary},
    config::{self, Config},
    layout::ProjectLayout,
    preview::preview_as_tree,
    source::{self, SourceImage},
    vfs::AssetPlan,
};
use std::path::PathBuf;

const NEXT_STEP_COMMAND: &str = "npx @capacitor/assets generate";
const ONLINE_ALTERNATIVE: &str = "https://www.appicon.co/";

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum IconPrepError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Source(#[from] source::SourceError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Apply(#[from] apply::ApplyError),
}

#[derive(Debug, Clone)]
pub struct PrepareOptions {
    /// Directory holding `resources/` and `android/`.
    pub project_root: PathBuf,
    /// Overrides both the configured and the default source image.
    pub source: Option<PathBuf>,
    /// Print the plan without touching the disk.
    pub dry_run: bool,
}
impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            source: None,
            dry_run: false,
        }
    }
}

/// Copies the source logo into the icon and splash resources and creates the mipmap
/// density folders of the project at `options.project_root`.
///
/// The source image is checked before anything is created, so a missing logo leaves the
/// project untouched.
///
/// # Errors
///
/// Returns an [`IconPrepError`] if:
///
/// - `iconprep.toml` exists but cannot be read or parsed.
/// - The source image is missing, is not a regular file, or is one of the files it
///   would be copied to.
/// - A directory cannot be created or a file cannot be copied. Everything created by
///   the run is removed again in that case.
pub fn prepare_assets(options: &PrepareOptions) -> Result<Summary, IconPrepError> {
    let config = Config::load(&options.project_root)?;

    let layout = ProjectLayout::resolve(&options.project_root, &config, options.source.as_deref());

    log::debug!("resolved layout: {:?}", layout);

    // checked before anything is created, so a missing logo leaves no resources/ behind
    let source = SourceImage::locate(&layout.source_image)?;

    print_layout(&layout, &source);

    let plan = AssetPlan::for_layout(&layout, &source);

    source.ensure_not_overwritten_by(plan.copy_targets())?;

    if options.dry_run {
        preview_as_tree(&plan, &layout.root);

        return Ok(Summary {
            dry_run: true,
            ..Summary::default()
        });
    }

    let summary = apply::try_apply(&plan)?;

    print_next_steps();

    Ok(summary)
}

fn print_layout(layout: &ProjectLayout, source: &SourceImage) {
    println!("Project root: {}", layout.root.display());
    println!(
        "Source image: {} ({} bytes)",
        source.path.display(),
        source.len
    );
    println!("Resources:    {}", layout.resources_dir.display());
    println!("Android res:  {}\n", layout.android_res_dir.display());
}

fn print_next_steps() {
    let rule = "=".repeat(50);

    println!("\n{}", rule);
    println!("Assets prepared successfully!");
    println!("{}", rule);
    println!("\nNext, run:");
    println!("  {}", NEXT_STEP_COMMAND);
    println!("\nOr use the online tool:");
    println!("  {}", ONLINE_ALTERNATIVE);
}
