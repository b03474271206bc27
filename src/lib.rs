use colored::Colorize;

mod cli;
pub use cli::Args;
mod error;
pub use error::Error;
mod notebook;
pub use notebook::{
    load_notebook, patch_kernel_metadata, save_notebook, set_kernel_metadata, KernelSpec,
    LanguageInfo, DEFAULT_VERSION,
};

pub fn run(args: Args) -> Result<(), Error> {
    set_kernel_metadata(&args.notebook_path, &args.kernel_name, &args.version)?;

    println!(
        "{}",
        format!(
            "[{}] kernel set to '{}' (version {})",
            args.notebook_path.display(),
            args.kernel_name,
            args.version
        )
        .green()
    );
    Ok(())
}
